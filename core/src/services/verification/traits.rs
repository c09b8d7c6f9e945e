//! Trait for the code delivery channel

use async_trait::async_trait;

/// Trait for SMS delivery integration
///
/// The channel either delivers the code out-of-band and returns a provider
/// message identifier, or reports failure. A development implementation that
/// records the code locally satisfies the same contract.
#[async_trait]
pub trait SmsServiceTrait: Send + Sync {
    /// Send a one-time code to a phone number
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String>;
}
