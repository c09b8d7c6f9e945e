//! # FolioGate Core
//!
//! Core business logic and domain layer for the FolioGate backend.
//! This crate contains the domain entities, the store abstractions, the
//! verification service, and the error types that form the foundation of
//! the OTP-gated access flow.

pub mod domain;
pub mod errors;
pub mod services;
pub mod stores;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
pub use stores::*;
