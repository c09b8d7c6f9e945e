//! Mock SMS Service Implementation
//!
//! Development and testing stand-in for a real SMS provider. Instead of
//! delivering messages it writes them to the log, so the one-time code can be
//! read locally. The success/failure contract matches the real providers.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use fg_shared::utils::phone::{is_valid_phone, mask_phone};

use super::service::SmsService;
use crate::InfrastructureError;

/// Mock SMS service for development and testing
#[derive(Clone, Default)]
pub struct MockSmsService {
    /// Last message recorded per phone number
    messages: Arc<Mutex<HashMap<String, String>>>,
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
}

impl MockSmsService {
    /// Create a new mock SMS service
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock service that fails every send
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Get the last message recorded for a phone number
    pub fn last_message(&self, phone: &str) -> Option<String> {
        self.messages
            .lock()
            .ok()
            .and_then(|m| m.get(phone).cloned())
    }
}

#[async_trait]
impl SmsService for MockSmsService {
    async fn send_sms(
        &self,
        phone_number: &str,
        message: &str,
    ) -> Result<String, InfrastructureError> {
        if !is_valid_phone(phone_number) {
            return Err(InfrastructureError::Sms(format!(
                "Invalid phone number format: {}",
                mask_phone(phone_number)
            )));
        }

        if self.simulate_failure {
            warn!(
                phone = %mask_phone(phone_number),
                "Mock SMS service simulating delivery failure"
            );
            return Err(InfrastructureError::Sms(
                "Simulated SMS delivery failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if let Ok(mut messages) = self.messages.lock() {
            messages.insert(phone_number.to_string(), message.to_string());
        }

        // The full content is logged on purpose: this is how the code reaches
        // a developer when no real provider is configured.
        info!(
            target: "sms_service",
            provider = "mock",
            phone = %mask_phone(phone_number),
            message_id = %message_id,
            message_number = count,
            content = %message,
            "SMS recorded (mock)"
        );

        // Simulate network delay
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_sms_send_success() {
        let service = MockSmsService::new();
        let result = service.send_sms("+15555555555", "Test message").await;

        assert!(result.is_ok());
        assert!(result.unwrap().starts_with("mock_"));
        assert_eq!(service.message_count(), 1);
        assert_eq!(
            service.last_message("+15555555555"),
            Some("Test message".to_string())
        );
    }

    #[tokio::test]
    async fn test_mock_sms_invalid_phone() {
        let service = MockSmsService::new();
        let result = service.send_sms("not-a-phone", "Test message").await;

        match result {
            Err(InfrastructureError::Sms(msg)) => {
                assert!(msg.contains("Invalid phone number"));
            }
            other => panic!("expected Sms error, got {:?}", other),
        }
        assert_eq!(service.message_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_sms_simulated_failure() {
        let service = MockSmsService::failing();
        let result = service.send_sms("+15555555555", "Test message").await;

        assert!(result.is_err());
        assert_eq!(service.message_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_sms_verification_code_format() {
        let service = MockSmsService::new();
        service
            .send_verification_code("+15555555555", "123456")
            .await
            .unwrap();

        assert_eq!(
            service.last_message("+15555555555"),
            Some("Your verification code is 123456".to_string())
        );
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(MockSmsService::new().provider_name(), "Mock");
    }
}
