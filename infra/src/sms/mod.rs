//! SMS Service Module
//!
//! Delivery channel implementations for one-time codes:
//!
//! - **SmsService trait**: common interface for all providers
//! - **Mock implementation**: records codes in the log for local inspection
//! - **Twilio support**: production SMS via the Twilio API (feature-gated)

mod core_adapter;
mod mock_sms;
mod service;

#[cfg(feature = "twilio-sms")]
mod twilio_sms;

// Re-export commonly used types
pub use core_adapter::SmsServiceAdapter;
pub use mock_sms::MockSmsService;
pub use service::SmsService;

#[cfg(feature = "twilio-sms")]
pub use twilio_sms::{TwilioConfig, TwilioSmsService};

use fg_shared::config::SmsConfig;

/// Create an SMS service based on configuration
///
/// Returns the provider named by the configuration, falling back to the mock
/// implementation when the provider is unknown or cannot be initialized.
pub fn create_sms_service(config: &SmsConfig) -> Box<dyn SmsService> {
    match config.provider.as_str() {
        "mock" => Box::new(MockSmsService::new()),
        #[cfg(feature = "twilio-sms")]
        "twilio" => {
            let twilio_config = TwilioConfig {
                account_sid: config.account_sid.clone(),
                auth_token: config.auth_token.clone(),
                from_number: config.from_number.clone(),
                max_retries: 3,
                retry_delay_ms: 1000,
            };

            match TwilioSmsService::new(twilio_config) {
                Ok(service) => Box::new(service),
                Err(e) => {
                    tracing::error!("Failed to initialize Twilio SMS service: {}", e);
                    tracing::warn!("Falling back to mock SMS service");
                    Box::new(MockSmsService::new())
                }
            }
        }
        other => {
            tracing::warn!(
                "Unknown SMS provider '{}', using mock implementation",
                other
            );
            Box::new(MockSmsService::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_defaults_to_mock() {
        let service = create_sms_service(&SmsConfig::default());
        assert_eq!(service.provider_name(), "Mock");
    }

    #[test]
    fn test_factory_falls_back_on_unknown_provider() {
        let config = SmsConfig {
            provider: "carrier-pigeon".to_string(),
            ..Default::default()
        };
        let service = create_sms_service(&config);
        assert_eq!(service.provider_name(), "Mock");
    }

    #[cfg(feature = "twilio-sms")]
    #[test]
    fn test_factory_builds_twilio_when_configured() {
        let config = SmsConfig {
            provider: "twilio".to_string(),
            account_sid: "AC00000000000000000000000000000000".to_string(),
            auth_token: "secret".to_string(),
            from_number: "+15555550000".to_string(),
        };
        let service = create_sms_service(&config);
        assert_eq!(service.provider_name(), "Twilio");
    }
}
