//! Domain-specific error types and error handling.

use thiserror::Error;

/// Client-visible verification errors
///
/// The display strings are exactly what the HTTP layer returns in the error
/// body, so changing one changes the wire contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Phone number did not match the E.164-like pattern
    #[error("Provide phone in E.164 format, e.g., +15555555555")]
    InvalidPhone,

    /// A verify call arrived without both required fields
    #[error("sessionId and otp are required")]
    MissingFields,

    /// Unknown or already-consumed session identifier
    ///
    /// The two cases are deliberately indistinguishable so a caller cannot
    /// probe whether an identifier ever existed.
    #[error("Invalid session")]
    InvalidSession,

    /// The session outlived its validity window
    #[error("OTP expired")]
    CodeExpired,

    /// Submitted code did not match; the session survives for retries
    #[error("Incorrect OTP")]
    IncorrectCode,

    /// The delivery channel reported failure
    #[error("Failed to send OTP")]
    DeliveryFailed,

    /// Missing, empty, or unknown bearer token
    #[error("Unauthorized")]
    Unauthorized,

    /// The bearer token outlived its validity window
    #[error("Session expired")]
    SessionExpired,
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    // Bridge to the client-visible taxonomy
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Store or infrastructure fault; never maps to a client error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
