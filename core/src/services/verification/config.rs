//! Configuration for the verification service

use crate::domain::entities::session::SESSION_TTL_SECONDS;
use crate::domain::entities::token::TOKEN_TTL_SECONDS;

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Seconds before a verification session expires
    pub session_ttl_seconds: i64,
    /// Seconds before an issued access token expires
    pub token_ttl_seconds: i64,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            session_ttl_seconds: SESSION_TTL_SECONDS,
            token_ttl_seconds: TOKEN_TTL_SECONDS,
        }
    }
}
