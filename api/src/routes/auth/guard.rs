use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, HttpRequest, HttpResponse};

use fg_core::services::verification::SmsServiceTrait;
use fg_core::stores::{SessionStore, TokenStore};

use crate::dto::auth::GuardResponse;
use crate::handlers::error::handle_domain_error;

use super::AppState;

/// Handler for GET /guard
///
/// Checks the bearer token from the Authorization header. Guarded portfolio
/// content is unlocked only while the token is live; a 401 tells the client
/// to discard any cached token and re-verify.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "ok": true }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: missing, unknown, or expired token
pub async fn guard<D, S, T>(
    req: HttpRequest,
    state: web::Data<AppState<D, S, T>>,
) -> HttpResponse
where
    D: SmsServiceTrait + 'static,
    S: SessionStore + 'static,
    T: TokenStore + 'static,
{
    let token = extract_bearer_token(&req).unwrap_or_default();

    match state.verification_service.authorize(&token).await {
        Ok(()) => HttpResponse::Ok().json(GuardResponse { ok: true }),
        Err(error) => handle_domain_error(error),
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
}
