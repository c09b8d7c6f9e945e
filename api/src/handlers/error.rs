//! Mapping from domain errors to HTTP responses

use actix_web::HttpResponse;

use fg_core::errors::{AuthError, DomainError};

use crate::dto::error::ErrorResponse;

/// Convert a domain error into its HTTP response
///
/// Every verification error is a non-fatal client error (400 or 401); only
/// infrastructure faults surface as 500, with the detail kept out of the body.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth) => {
            let body = ErrorResponse::new(auth.to_string());
            match auth {
                AuthError::Unauthorized | AuthError::SessionExpired => {
                    HttpResponse::Unauthorized().json(body)
                }
                _ => HttpResponse::BadRequest().json(body),
            }
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Internal server error"))
        }
    }
}
