use actix_web::{web, HttpResponse};

use fg_core::services::verification::SmsServiceTrait;
use fg_core::stores::{SessionStore, TokenStore};

use crate::dto::auth::{VerifyRequest, VerifyResponse};
use crate::handlers::error::handle_domain_error;

use super::AppState;

/// Handler for POST /verify
///
/// Checks a submitted code against its pending session. On match the session
/// is consumed and a bearer access token is returned.
///
/// # Request Body
///
/// ```json
/// { "sessionId": "…", "otp": "123456" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "accessToken": "…", "expiresIn": 900 }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing fields, unknown session, expired or wrong code
pub async fn verify<D, S, T>(
    state: web::Data<AppState<D, S, T>>,
    request: web::Json<VerifyRequest>,
) -> HttpResponse
where
    D: SmsServiceTrait + 'static,
    S: SessionStore + 'static,
    T: TokenStore + 'static,
{
    let session_id = request.session_id.as_deref().unwrap_or("");
    let otp = request.otp.as_deref().unwrap_or("");

    match state.verification_service.verify_code(session_id, otp).await {
        Ok(outcome) => HttpResponse::Ok().json(VerifyResponse {
            access_token: outcome.access_token,
            expires_in: outcome.expires_in,
        }),
        Err(error) => handle_domain_error(error),
    }
}
