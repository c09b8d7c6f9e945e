//! Types for verification service results

/// Result of starting a verification
#[derive(Debug, Clone)]
pub struct StartOutcome {
    /// Opaque identifier of the pending verification session
    pub session_id: String,
    /// Session lifetime in seconds
    pub ttl: i64,
}

/// Result of a successful code verification
#[derive(Debug, Clone)]
pub struct VerifyOutcome {
    /// Bearer token unlocking guarded content
    pub access_token: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}
