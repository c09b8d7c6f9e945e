//! Verification service module for OTP-gated access
//!
//! This module provides the complete verification workflow:
//! - Session creation and one-time code generation
//! - Code delivery through a pluggable SMS channel
//! - Code verification and access token issuance
//! - Bearer token authorization for guarded content

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::VerificationServiceConfig;
pub use service::VerificationService;
pub use traits::SmsServiceTrait;
pub use types::{StartOutcome, VerifyOutcome};
