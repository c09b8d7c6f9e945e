//! Tests for the guard endpoint and bearer token handling

use actix_web::{http::StatusCode, test, web, App};
use std::sync::Arc;

use fg_api::app::configure_routes;
use fg_api::dto::auth::{GuardResponse, StartResponse, VerifyResponse};
use fg_api::dto::error::ErrorResponse;
use fg_api::routes::auth::AppState;
use fg_core::domain::entities::token::AccessToken;
use fg_core::services::verification::{VerificationService, VerificationServiceConfig};
use fg_core::stores::{SessionStore, TokenStore};
use fg_infra::sms::{MockSmsService, SmsServiceAdapter};
use fg_infra::store::{MemorySessionStore, MemoryTokenStore};

type TestState = AppState<SmsServiceAdapter, MemorySessionStore, MemoryTokenStore>;

fn build_test_state() -> (
    web::Data<TestState>,
    Arc<MemorySessionStore>,
    Arc<MemoryTokenStore>,
) {
    let session_store = Arc::new(MemorySessionStore::new());
    let token_store = Arc::new(MemoryTokenStore::new());
    let sms_service = Arc::new(SmsServiceAdapter::new(Box::new(MockSmsService::new())));

    let verification_service = Arc::new(VerificationService::new(
        sms_service,
        session_store.clone(),
        token_store.clone(),
        VerificationServiceConfig::default(),
    ));

    (
        web::Data::new(AppState {
            verification_service,
        }),
        session_store,
        token_store,
    )
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new().app_data($state.clone()).configure(
                configure_routes::<SmsServiceAdapter, MemorySessionStore, MemoryTokenStore>,
            ),
        )
        .await
    };
}

#[actix_web::test]
async fn test_guard_without_header() {
    let (state, _, _) = build_test_state();
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/guard").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Unauthorized");
}

#[actix_web::test]
async fn test_guard_with_unknown_token() {
    let (state, _, _) = build_test_state();
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/guard")
        .insert_header(("Authorization", "Bearer not-a-real-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_guard_with_wrong_scheme() {
    let (state, _, _) = build_test_state();
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/guard")
        .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_guard_accepts_live_token_repeatedly() {
    let (state, sessions, _) = build_test_state();
    let app = init_app!(state);

    // Obtain a token through the regular flow
    let req = test::TestRequest::post()
        .uri("/start")
        .set_json(serde_json::json!({ "phone": "+15555555555" }))
        .to_request();
    let started: StartResponse = test::call_and_read_body_json(&app, req).await;

    let code = sessions
        .get(&started.session_id)
        .await
        .unwrap()
        .expect("session should exist")
        .code;

    let req = test::TestRequest::post()
        .uri("/verify")
        .set_json(serde_json::json!({ "sessionId": &started.session_id, "otp": &code }))
        .to_request();
    let verified: VerifyResponse = test::call_and_read_body_json(&app, req).await;

    // Guard checks do not consume the token
    for _ in 0..3 {
        let req = test::TestRequest::get()
            .uri("/guard")
            .insert_header(("Authorization", format!("Bearer {}", verified.access_token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: GuardResponse = test::read_body_json(resp).await;
        assert!(body.ok);
    }
}

#[actix_web::test]
async fn test_guard_expired_token_cannot_be_revived() {
    let (state, _, tokens) = build_test_state();
    let app = init_app!(state);

    tokens
        .insert(AccessToken::with_ttl("deadbeef".to_string(), -1))
        .await
        .unwrap();

    // Expiry is detected lazily on access and removes the record
    let req = test::TestRequest::get()
        .uri("/guard")
        .insert_header(("Authorization", "Bearer deadbeef"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Session expired");
    assert!(tokens.is_empty());

    // A second check sees an unknown token
    let req = test::TestRequest::get()
        .uri("/guard")
        .insert_header(("Authorization", "Bearer deadbeef"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Unauthorized");
}
