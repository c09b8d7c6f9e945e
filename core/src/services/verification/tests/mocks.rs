//! Mock implementations for testing the verification service

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::entities::session::VerificationSession;
use crate::domain::entities::token::AccessToken;
use crate::services::verification::traits::SmsServiceTrait;
use crate::stores::{SessionStore, TokenStore};

// Mock SMS channel recording delivered codes
pub struct MockSmsService {
    pub sent_codes: Arc<Mutex<HashMap<String, String>>>,
    pub should_fail: bool,
}

impl MockSmsService {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent_codes: Arc::new(Mutex::new(HashMap::new())),
            should_fail,
        }
    }

    pub fn sent_code(&self, phone: &str) -> Option<String> {
        self.sent_codes.lock().unwrap().get(phone).cloned()
    }

    pub fn sent_count(&self) -> usize {
        self.sent_codes.lock().unwrap().len()
    }
}

#[async_trait]
impl SmsServiceTrait for MockSmsService {
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String> {
        if self.should_fail {
            return Err("SMS channel error".to_string());
        }
        self.sent_codes
            .lock()
            .unwrap()
            .insert(phone.to_string(), code.to_string());
        Ok(format!("mock-msg-{}", uuid::Uuid::new_v4()))
    }
}

// Mock session store
pub struct MockSessionStore {
    pub sessions: Arc<Mutex<HashMap<String, VerificationSession>>>,
    pub should_fail: bool,
}

impl MockSessionStore {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            should_fail,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn put(&self, session: VerificationSession) {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.id.clone(), session);
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn insert(&self, session: VerificationSession) -> Result<(), String> {
        if self.should_fail {
            return Err("session store error".to_string());
        }
        self.sessions
            .lock()
            .unwrap()
            .insert(session.id.clone(), session);
        Ok(())
    }

    async fn get(&self, session_id: &str) -> Result<Option<VerificationSession>, String> {
        if self.should_fail {
            return Err("session store error".to_string());
        }
        Ok(self.sessions.lock().unwrap().get(session_id).cloned())
    }

    async fn remove(&self, session_id: &str) -> Result<Option<VerificationSession>, String> {
        if self.should_fail {
            return Err("session store error".to_string());
        }
        Ok(self.sessions.lock().unwrap().remove(session_id))
    }
}

// Mock token store
pub struct MockTokenStore {
    pub tokens: Arc<Mutex<HashMap<String, AccessToken>>>,
}

impl MockTokenStore {
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.lock().unwrap().len()
    }

    pub fn put(&self, token: AccessToken) {
        self.tokens
            .lock()
            .unwrap()
            .insert(token.token.clone(), token);
    }
}

#[async_trait]
impl TokenStore for MockTokenStore {
    async fn insert(&self, token: AccessToken) -> Result<(), String> {
        self.tokens
            .lock()
            .unwrap()
            .insert(token.token.clone(), token);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<AccessToken>, String> {
        Ok(self.tokens.lock().unwrap().get(token).cloned())
    }

    async fn remove(&self, token: &str) -> Result<Option<AccessToken>, String> {
        Ok(self.tokens.lock().unwrap().remove(token))
    }
}
