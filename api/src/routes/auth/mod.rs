//! Verification protocol routes

pub mod guard;
pub mod start;
pub mod verify;

use std::sync::Arc;

use fg_core::services::verification::{SmsServiceTrait, VerificationService};
use fg_core::stores::{SessionStore, TokenStore};

pub use guard::guard;
pub use start::start;
pub use verify::verify;

/// Application state that holds shared services
pub struct AppState<D, S, T>
where
    D: SmsServiceTrait,
    S: SessionStore,
    T: TokenStore,
{
    pub verification_service: Arc<VerificationService<D, S, T>>,
}
