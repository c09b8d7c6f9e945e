//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the FolioGate backend.
//! It provides concrete implementations of the core abstractions:
//!
//! - **Stores**: process-local in-memory session and token stores
//! - **SMS**: delivery channel implementations (mock, Twilio)
//!
//! ## Features
//!
//! - `twilio-sms`: Enable the Twilio SMS service (default)

/// SMS service module - code delivery channels
pub mod sms;

/// Store module - in-memory state backing the verification protocol
pub mod store;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),
}
