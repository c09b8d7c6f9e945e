//! Main verification service implementation

use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use std::sync::Arc;

use fg_shared::utils::phone::{is_valid_phone, mask_phone};

use crate::domain::entities::session::VerificationSession;
use crate::domain::entities::token::AccessToken;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::stores::{SessionStore, TokenStore};

use super::config::VerificationServiceConfig;
use super::traits::SmsServiceTrait;
use super::types::{StartOutcome, VerifyOutcome};

/// Number of random bytes behind an access token
const TOKEN_BYTES: usize = 32;

/// Verification service orchestrating the OTP session and token lifecycle
pub struct VerificationService<D, S, T>
where
    D: SmsServiceTrait,
    S: SessionStore,
    T: TokenStore,
{
    /// SMS channel used to deliver one-time codes
    sms_service: Arc<D>,
    /// Store for pending verification sessions
    session_store: Arc<S>,
    /// Store for issued access tokens
    token_store: Arc<T>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<D, S, T> VerificationService<D, S, T>
where
    D: SmsServiceTrait,
    S: SessionStore,
    T: TokenStore,
{
    /// Create a new verification service
    pub fn new(
        sms_service: Arc<D>,
        session_store: Arc<S>,
        token_store: Arc<T>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            sms_service,
            session_store,
            token_store,
            config,
        }
    }

    /// Begin a verification for a phone number
    ///
    /// Issues a fresh session holding a generated code, stores it, and hands
    /// the code to the delivery channel. Every call creates an independent
    /// session; a resend is simply another call with the same phone, and any
    /// prior session for that phone ages out on its own.
    pub async fn start_verification(&self, phone: &str) -> DomainResult<StartOutcome> {
        if !is_valid_phone(phone) {
            return Err(AuthError::InvalidPhone.into());
        }

        let code = Self::generate_code();
        let session = VerificationSession::with_ttl(
            phone.to_string(),
            code,
            self.config.session_ttl_seconds,
        );
        let session_id = session.id.clone();

        tracing::info!(
            phone = %mask_phone(phone),
            session_id = %session_id,
            event = "otp_generated",
            "Generated verification code"
        );

        self.session_store
            .insert(session.clone())
            .await
            .map_err(internal)?;

        // The record is stored before delivery is attempted; on delivery
        // failure the caller is told the operation failed and the orphaned
        // session ages out on expiry.
        match self
            .sms_service
            .send_verification_code(phone, &session.code)
            .await
        {
            Ok(message_id) => {
                tracing::info!(
                    phone = %mask_phone(phone),
                    message_id = %message_id,
                    event = "otp_sent",
                    "Verification code sent"
                );
            }
            Err(e) => {
                tracing::error!(
                    phone = %mask_phone(phone),
                    error = %e,
                    event = "otp_send_failed",
                    "Failed to send verification code"
                );
                return Err(AuthError::DeliveryFailed.into());
            }
        }

        Ok(StartOutcome {
            session_id,
            ttl: self.config.session_ttl_seconds,
        })
    }

    /// Verify a submitted code against a pending session
    ///
    /// On match the session is consumed and a bearer access token is issued.
    /// A mismatched code leaves the session in place so the user can retry
    /// until expiry.
    pub async fn verify_code(&self, session_id: &str, code: &str) -> DomainResult<VerifyOutcome> {
        if session_id.is_empty() || code.is_empty() {
            return Err(AuthError::MissingFields.into());
        }

        let session = self
            .session_store
            .get(session_id)
            .await
            .map_err(internal)?
            .ok_or(AuthError::InvalidSession)?;

        if session.is_expired() {
            self.session_store
                .remove(session_id)
                .await
                .map_err(internal)?;
            tracing::info!(
                session_id = %session_id,
                event = "otp_expired",
                "Discarded expired verification session"
            );
            return Err(AuthError::CodeExpired.into());
        }

        if !session.code_matches(code) {
            tracing::warn!(
                session_id = %session_id,
                event = "otp_mismatch",
                "Incorrect verification code submitted"
            );
            return Err(AuthError::IncorrectCode.into());
        }

        // Consume the session. If a racing verify already took it, this
        // attempt reports the same error an unknown identifier would.
        if self
            .session_store
            .remove(session_id)
            .await
            .map_err(internal)?
            .is_none()
        {
            return Err(AuthError::InvalidSession.into());
        }

        let token = AccessToken::with_ttl(Self::generate_token(), self.config.token_ttl_seconds);
        let access_token = token.token.clone();
        self.token_store.insert(token).await.map_err(internal)?;

        tracing::info!(
            phone = %mask_phone(&session.phone),
            session_id = %session_id,
            event = "otp_verified",
            "Verification succeeded, access token issued"
        );

        Ok(VerifyOutcome {
            access_token,
            expires_in: self.config.token_ttl_seconds,
        })
    }

    /// Check a bearer token against the token store
    ///
    /// Expired tokens are removed on observation; live tokens stay valid for
    /// further checks.
    pub async fn authorize(&self, token: &str) -> DomainResult<()> {
        if token.is_empty() {
            return Err(AuthError::Unauthorized.into());
        }

        let record = self
            .token_store
            .get(token)
            .await
            .map_err(internal)?
            .ok_or(AuthError::Unauthorized)?;

        if record.is_expired() {
            self.token_store.remove(token).await.map_err(internal)?;
            tracing::info!(event = "token_expired", "Discarded expired access token");
            return Err(AuthError::SessionExpired.into());
        }

        Ok(())
    }

    /// Generate a 6-digit one-time code, uniform over the code space
    ///
    /// Drawn from the OS CSPRNG; never derived from counters, clocks, or
    /// session identifiers.
    pub fn generate_code() -> String {
        let n: u32 = OsRng.gen_range(0..1_000_000);
        format!("{:06}", n)
    }

    /// Generate an opaque access token from 32 random bytes
    fn generate_token() -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

fn internal(message: String) -> DomainError {
    DomainError::Internal { message }
}
