//! CORS middleware configuration for cross-origin requests.
//!
//! The portfolio page is served from a separate origin (e.g. GitHub Pages),
//! so the API must accept cross-origin requests from wherever it is hosted.
//! The allowed origin comes from configuration; "*" permits any origin.

use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Creates a CORS middleware instance for the configured origin
pub fn create_cors(origin: &str) -> Cors {
    log::info!("Configuring CORS for origin: {}", origin);

    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600);

    if origin == "*" {
        cors.allow_any_origin()
    } else {
        cors.allowed_origin(origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_permissive_cors() {
        let _cors = create_cors("*");
    }

    #[test]
    fn test_create_cors_for_specific_origin() {
        let _cors = create_cors("https://example.github.io");
    }
}
