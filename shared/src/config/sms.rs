//! SMS delivery configuration module

use serde::{Deserialize, Serialize};
use std::env;

/// SMS delivery provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// SMS service provider ("twilio" or "mock")
    pub provider: String,

    /// Provider account identifier (Twilio account SID)
    #[serde(default)]
    pub account_sid: String,

    /// Provider API secret (Twilio auth token)
    #[serde(default)]
    pub auth_token: String,

    /// Sender phone number
    #[serde(default)]
    pub from_number: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            account_sid: String::new(),
            auth_token: String::new(),
            from_number: String::new(),
        }
    }
}

impl SmsConfig {
    /// Load the configuration from environment variables
    ///
    /// When `SMS_PROVIDER` is unset, the provider is inferred: Twilio if the
    /// full credential set is present, mock otherwise. This mirrors the
    /// development fallback of logging codes locally when no provider is
    /// configured.
    pub fn from_env() -> Self {
        let account_sid = env::var("TWILIO_ACCOUNT_SID").unwrap_or_default();
        let auth_token = env::var("TWILIO_AUTH_TOKEN").unwrap_or_default();
        let from_number = env::var("TWILIO_FROM").unwrap_or_default();

        let provider = env::var("SMS_PROVIDER").unwrap_or_else(|_| {
            if !account_sid.is_empty() && !auth_token.is_empty() && !from_number.is_empty() {
                String::from("twilio")
            } else {
                String::from("mock")
            }
        });

        Self {
            provider,
            account_sid,
            auth_token,
            from_number,
        }
    }

    /// Check whether the Twilio credential set is complete
    pub fn has_twilio_credentials(&self) -> bool {
        !self.account_sid.is_empty() && !self.auth_token.is_empty() && !self.from_number.is_empty()
    }
}
