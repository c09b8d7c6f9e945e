use actix_web::{web, HttpResponse};

use fg_core::services::verification::SmsServiceTrait;
use fg_core::stores::{SessionStore, TokenStore};
use fg_shared::utils::phone::mask_phone;

use crate::dto::auth::{StartRequest, StartResponse};
use crate::handlers::error::handle_domain_error;

use super::AppState;

/// Handler for POST /start
///
/// Begins a verification: issues a pending session and delivers a one-time
/// code to the submitted phone number.
///
/// # Request Body
///
/// ```json
/// { "phone": "+15555555555" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "sessionId": "…", "ttl": 180 }
/// ```
///
/// ## Errors
/// - 400 Bad Request: malformed phone number or delivery failure
pub async fn start<D, S, T>(
    state: web::Data<AppState<D, S, T>>,
    request: web::Json<StartRequest>,
) -> HttpResponse
where
    D: SmsServiceTrait + 'static,
    S: SessionStore + 'static,
    T: TokenStore + 'static,
{
    let phone = request.phone.as_deref().unwrap_or("");

    log::info!("Processing start request for phone: {}", mask_phone(phone));

    match state.verification_service.start_verification(phone).await {
        Ok(outcome) => HttpResponse::Ok().json(StartResponse {
            session_id: outcome.session_id,
            ttl: outcome.ttl,
        }),
        Err(error) => handle_domain_error(error),
    }
}
