//! SMS Service Interface
//!
//! Defines the trait for SMS service implementations that deliver one-time
//! verification codes.

use async_trait::async_trait;

use crate::InfrastructureError;

/// SMS service trait for sending text messages
///
/// Implementations include:
/// - Twilio SMS API
/// - Mock implementation for development and testing
#[async_trait]
pub trait SmsService: Send + Sync {
    /// Send an SMS message to a phone number
    ///
    /// Returns the provider's message identifier on success.
    async fn send_sms(
        &self,
        phone_number: &str,
        message: &str,
    ) -> Result<String, InfrastructureError>;

    /// Send a one-time verification code via SMS
    ///
    /// Convenience method that applies the standard message format.
    async fn send_verification_code(
        &self,
        phone_number: &str,
        code: &str,
    ) -> Result<String, InfrastructureError> {
        let message = format!("Your verification code is {}", code);
        self.send_sms(phone_number, &message).await
    }

    /// Get the service provider name
    fn provider_name(&self) -> &str;
}
