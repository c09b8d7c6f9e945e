//! Access token entity granting temporary access to guarded content.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default lifetime of an access token in seconds (15 minutes)
pub const TOKEN_TTL_SECONDS: i64 = 900;

/// A bearer token issued after successful verification
///
/// Tokens are valid for repeated guard checks until expiry; they are not
/// single-use and have no revocation path other than expiring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Opaque bearer token string, independent of any session identifier
    pub token: String,

    /// Timestamp when the token was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp after which the token is invalid
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Creates a new token with the default lifetime
    pub fn new(token: String) -> Self {
        Self::with_ttl(token, TOKEN_TTL_SECONDS)
    }

    /// Creates a new token with a custom lifetime
    pub fn with_ttl(token: String, ttl_seconds: i64) -> Self {
        let now = Utc::now();

        Self {
            token,
            issued_at: now,
            expires_at: now + Duration::seconds(ttl_seconds),
        }
    }

    /// Checks if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}
