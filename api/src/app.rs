//! Application assembly
//!
//! Builds the default application state and registers the HTTP routes. Route
//! registration is generic over the core service traits so tests can assemble
//! the app around their own stores and delivery channel.

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use fg_core::services::verification::{
    SmsServiceTrait, VerificationService, VerificationServiceConfig,
};
use fg_core::stores::{SessionStore, TokenStore};
use fg_infra::sms::{create_sms_service, SmsServiceAdapter};
use fg_infra::store::{MemorySessionStore, MemoryTokenStore};
use fg_shared::config::SmsConfig;

use crate::dto::auth::HealthResponse;
use crate::routes::auth::{guard, start, verify, AppState};

/// Application state with the default in-memory backing
pub type DefaultAppState = AppState<SmsServiceAdapter, MemorySessionStore, MemoryTokenStore>;

/// Assemble the default application state from configuration
pub fn build_state(sms_config: &SmsConfig) -> DefaultAppState {
    let sms_service = Arc::new(SmsServiceAdapter::new(create_sms_service(sms_config)));
    let session_store = Arc::new(MemorySessionStore::new());
    let token_store = Arc::new(MemoryTokenStore::new());

    let verification_service = Arc::new(VerificationService::new(
        sms_service,
        session_store,
        token_store,
        VerificationServiceConfig::default(),
    ));

    AppState {
        verification_service,
    }
}

/// Register all routes
pub fn configure_routes<D, S, T>(cfg: &mut web::ServiceConfig)
where
    D: SmsServiceTrait + 'static,
    S: SessionStore + 'static,
    T: TokenStore + 'static,
{
    cfg.route("/health", web::get().to(health_check))
        .route("/start", web::post().to(start::<D, S, T>))
        .route("/verify", web::post().to(verify::<D, S, T>))
        .route("/guard", web::get().to(guard::<D, S, T>))
        .default_service(web::route().to(not_found));
}

/// Health check endpoint handler (liveness only)
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
