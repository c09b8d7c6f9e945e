//! Twilio SMS Service Implementation
//!
//! Sends one-time codes through the Twilio API. Failed requests are retried
//! with exponential backoff before the failure is reported to the caller.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error, info};
use twilio::{Client, OutboundMessage};

use fg_shared::utils::phone::{is_valid_phone, mask_phone};

use super::service::SmsService;
use crate::InfrastructureError;

/// Twilio message length limit in characters
const MAX_MESSAGE_LENGTH: usize = 1600;

/// Twilio SMS service configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number)
    pub from_number: String,
    /// Maximum attempts for failed requests
    pub max_retries: u32,
    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
}

impl TwilioConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let account_sid = std::env::var("TWILIO_ACCOUNT_SID")
            .map_err(|_| InfrastructureError::Config("TWILIO_ACCOUNT_SID not set".to_string()))?;
        let auth_token = std::env::var("TWILIO_AUTH_TOKEN")
            .map_err(|_| InfrastructureError::Config("TWILIO_AUTH_TOKEN not set".to_string()))?;
        let from_number = std::env::var("TWILIO_FROM")
            .map_err(|_| InfrastructureError::Config("TWILIO_FROM not set".to_string()))?;

        if !from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "TWILIO_FROM must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        Ok(Self {
            account_sid,
            auth_token,
            from_number,
            max_retries: 3,
            retry_delay_ms: 1000,
        })
    }
}

/// Twilio SMS service implementation
pub struct TwilioSmsService {
    client: Client,
    config: TwilioConfig,
}

impl TwilioSmsService {
    /// Create a new Twilio SMS service
    pub fn new(config: TwilioConfig) -> Result<Self, InfrastructureError> {
        if config.account_sid.is_empty() || config.auth_token.is_empty() {
            return Err(InfrastructureError::Config(
                "Twilio credentials are not configured".to_string(),
            ));
        }

        let client = Client::new(&config.account_sid, &config.auth_token);

        info!(
            "Twilio SMS service initialized with from number: {}",
            mask_phone(&config.from_number)
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(TwilioConfig::from_env()?)
    }

    /// Send with retry and exponential backoff
    async fn send_with_retry(
        &self,
        to: &str,
        message: &str,
    ) -> Result<String, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;

            debug!(
                "Sending SMS attempt {}/{} to {}",
                attempts,
                self.config.max_retries,
                mask_phone(to)
            );

            let msg = OutboundMessage::new(&self.config.from_number, to, message);

            match self.client.send_message(msg).await {
                Ok(response) => {
                    info!(
                        "SMS sent to {} with SID: {}",
                        mask_phone(to),
                        response.sid
                    );
                    return Ok(response.sid);
                }
                Err(e) => {
                    error!(
                        "Failed to send SMS (attempt {}/{}): {}",
                        attempts, self.config.max_retries, e
                    );

                    if attempts >= self.config.max_retries {
                        return Err(InfrastructureError::Sms(format!(
                            "Failed to send SMS after {} attempts: {}",
                            self.config.max_retries, e
                        )));
                    }

                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }
}

/// Normalize a valid phone number to the leading-'+' form Twilio expects
fn normalize_phone(phone: &str) -> String {
    if phone.starts_with('+') {
        phone.to_string()
    } else {
        format!("+{}", phone)
    }
}

#[async_trait]
impl SmsService for TwilioSmsService {
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

        if message.len() > MAX_MESSAGE_LENGTH {
            return Err(InfrastructureError::Sms(format!(
                "Message exceeds maximum length of {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }

        let to = normalize_phone(phone_number);
        self.send_with_retry(&to, message).await
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}
