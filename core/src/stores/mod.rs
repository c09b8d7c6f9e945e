//! Store abstractions for verification state.
//!
//! The verification service only sees these traits; the backing
//! implementation (in-memory today) can be swapped for a durable or
//! distributed store without touching protocol logic.

use async_trait::async_trait;

use crate::domain::entities::session::VerificationSession;
use crate::domain::entities::token::AccessToken;

/// Store for pending verification sessions, keyed by session identifier
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a pending session under its identifier
    async fn insert(&self, session: VerificationSession) -> Result<(), String>;

    /// Fetch a session without consuming it
    async fn get(&self, session_id: &str) -> Result<Option<VerificationSession>, String>;

    /// Remove a session, returning it only to the caller that deleted it
    ///
    /// This is the atomic take primitive: for a given identifier, at most one
    /// of any number of racing callers observes `Some`.
    async fn remove(&self, session_id: &str) -> Result<Option<VerificationSession>, String>;
}

/// Store for issued access tokens, keyed by the token string
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Store an issued token
    async fn insert(&self, token: AccessToken) -> Result<(), String>;

    /// Fetch a token record without consuming it
    async fn get(&self, token: &str) -> Result<Option<AccessToken>, String>;

    /// Remove a token record, returning it only to the caller that deleted it
    async fn remove(&self, token: &str) -> Result<Option<AccessToken>, String>;
}
