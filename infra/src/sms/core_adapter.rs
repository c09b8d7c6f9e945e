//! Adapter exposing infrastructure SMS services to the core service layer

use async_trait::async_trait;

use fg_core::services::verification::SmsServiceTrait;

use super::service::SmsService;

/// Wraps any infrastructure SMS service behind the core-facing delivery trait
pub struct SmsServiceAdapter {
    inner: Box<dyn SmsService>,
}

impl SmsServiceAdapter {
    pub fn new(inner: Box<dyn SmsService>) -> Self {
        Self { inner }
    }

    /// Name of the wrapped provider
    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

#[async_trait]
impl SmsServiceTrait for SmsServiceAdapter {
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String> {
        self.inner
            .send_verification_code(phone, code)
            .await
            .map_err(|e| e.to_string())
    }
}
