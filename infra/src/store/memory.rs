//! Process-local session and token stores

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use fg_core::domain::entities::session::VerificationSession;
use fg_core::domain::entities::token::AccessToken;
use fg_core::stores::{SessionStore, TokenStore};

fn lock_error() -> String {
    "store mutex poisoned".to_string()
}

/// In-memory session store backed by a mutex-guarded map
///
/// `remove` takes the record under the lock, so racing consumers of the same
/// identifier observe at most one `Some`.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, VerificationSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn insert(&self, session: VerificationSession) -> Result<(), String> {
        let mut sessions = self.sessions.lock().map_err(|_| lock_error())?;
        sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn get(&self, session_id: &str) -> Result<Option<VerificationSession>, String> {
        let sessions = self.sessions.lock().map_err(|_| lock_error())?;
        Ok(sessions.get(session_id).cloned())
    }

    async fn remove(&self, session_id: &str) -> Result<Option<VerificationSession>, String> {
        let mut sessions = self.sessions.lock().map_err(|_| lock_error())?;
        Ok(sessions.remove(session_id))
    }
}

/// In-memory token store backed by a mutex-guarded map
#[derive(Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<HashMap<String, AccessToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.tokens.lock().map(|t| t.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn insert(&self, token: AccessToken) -> Result<(), String> {
        let mut tokens = self.tokens.lock().map_err(|_| lock_error())?;
        tokens.insert(token.token.clone(), token);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<AccessToken>, String> {
        let tokens = self.tokens.lock().map_err(|_| lock_error())?;
        Ok(tokens.get(token).cloned())
    }

    async fn remove(&self, token: &str) -> Result<Option<AccessToken>, String> {
        let mut tokens = self.tokens.lock().map_err(|_| lock_error())?;
        Ok(tokens.remove(token))
    }
}
