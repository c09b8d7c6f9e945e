//! Verification session entity for OTP-gated access.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the one-time code
pub const CODE_LENGTH: usize = 6;

/// Default lifetime of a verification session in seconds (3 minutes)
pub const SESSION_TTL_SECONDS: i64 = 180;

/// A pending phone verification awaiting code submission
///
/// Each session is keyed by an opaque, randomly generated identifier and is
/// consumed exactly once: on successful verification or on expiry detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSession {
    /// Opaque session identifier handed back to the client
    pub id: String,

    /// Phone number the code was sent to (E.164-like format)
    pub phone: String,

    /// The expected 6-digit one-time code
    pub code: String,

    /// Timestamp when the session was created
    pub created_at: DateTime<Utc>,

    /// Timestamp after which the session is invalid
    pub expires_at: DateTime<Utc>,
}

impl VerificationSession {
    /// Creates a new session with the default lifetime
    pub fn new(phone: String, code: String) -> Self {
        Self::with_ttl(phone, code, SESSION_TTL_SECONDS)
    }

    /// Creates a new session with a custom lifetime
    ///
    /// The identifier is drawn from a cryptographically strong random source,
    /// never from a counter.
    pub fn with_ttl(phone: String, code: String, ttl_seconds: i64) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            phone,
            code,
            created_at: now,
            expires_at: now + Duration::seconds(ttl_seconds),
        }
    }

    /// Checks if the session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Compares a submitted code against the stored one
    ///
    /// Exact string equality, evaluated in constant time.
    pub fn code_matches(&self, input_code: &str) -> bool {
        self.code.len() == input_code.len()
            && constant_time_eq(self.code.as_bytes(), input_code.as_bytes())
    }

    /// Gets the time remaining until expiration, or zero if expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}
