//! Integration tests for the signup and email-verification endpoints

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web};
use serde_json::{json, Value};

use sc_api::app::create_app;
use sc_api::routes::auth::AppState;
use sc_core::repositories::history::MockUserHistoryRepository;
use sc_core::repositories::plan::MockPlanRepository;
use sc_core::repositories::user::MockUserRepository;
use sc_core::repositories::UserRepository;
use sc_core::services::auth::AuthService;
use sc_core::services::email::{MockEmailService, OTP_EMAIL_SUBJECT};
use sc_core::services::otp::{MemoryOtpStore, OtpConfig, OtpManager};
use sc_core::services::recommendation::RecommendationService;

type TestState = AppState<
    MockUserRepository,
    MockEmailService,
    MemoryOtpStore,
    MockPlanRepository,
    MockUserHistoryRepository,
>;

struct TestContext {
    state: web::Data<TestState>,
    email_service: Arc<MockEmailService>,
    user_repository: Arc<MockUserRepository>,
}

fn test_context() -> TestContext {
    let user_repository = Arc::new(MockUserRepository::new());
    let email_service = Arc::new(MockEmailService::new());
    let otp_manager = Arc::new(OtpManager::new(
        Arc::new(MemoryOtpStore::new()),
        OtpConfig::default(),
    ));

    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        email_service.clone(),
        otp_manager,
    ));
    let recommendation_service = Arc::new(RecommendationService::new(
        Arc::new(MockPlanRepository::new()),
        Arc::new(MockUserHistoryRepository::new()),
    ));

    TestContext {
        state: web::Data::new(AppState {
            auth_service,
            recommendation_service,
        }),
        email_service,
        user_repository,
    }
}

fn signup_body() -> Value {
    json!({
        "name": "Priya Sharma",
        "email": "priya@example.com",
        "dateOfBirth": "1990-05-10"
    })
}

fn send_otp_body() -> Value {
    json!({"email": "priya@example.com"})
}

/// Pull the six-digit code out of a rendered verification email
fn extract_code(body: &str) -> String {
    let mut run = String::new();
    for ch in body.chars() {
        if ch.is_ascii_digit() {
            run.push(ch);
            if run.len() == 6 {
                return run;
            }
        } else {
            run.clear();
        }
    }
    panic!("no six-digit code in email body: {}", body);
}

#[actix_web::test]
async fn test_signup_creates_user() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(signup_body())
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["data"]["name"], "Priya Sharma");
    assert_eq!(body["data"]["email"], "priya@example.com");
    assert_eq!(body["data"]["dateOfBirth"], "1990-05-10");
    assert_eq!(body["data"]["isActive"], json!(true));
    assert!(body["data"]["id"].as_i64().unwrap() >= 1);
    assert!(body.get("error").is_none());
}

#[actix_web::test]
async fn test_signup_rejects_invalid_fields_with_details() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(json!({
            "name": "X9",
            "email": "not-an-email",
            "dateOfBirth": "10/05/1990"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    let details = body["error"]["details"].as_object().unwrap();
    assert!(details.contains_key("name"));
    assert!(details.contains_key("email"));
    assert!(details.contains_key("date_of_birth"));
    assert!(body.get("data").is_none());
}

#[actix_web::test]
async fn test_signup_rejects_duplicate_email() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(signup_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(json!({
            "name": "Priya Again",
            "email": "priya@example.com",
            "dateOfBirth": "1992-01-01"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Email already registered");
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_signup_rejects_underage_user() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let recent = chrono::Utc::now().date_naive() - chrono::Duration::days(365 * 10);
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(json!({
            "name": "Too Young",
            "email": "young@example.com",
            "dateOfBirth": recent.format("%Y-%m-%d").to_string()
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_send_otp_unknown_email_is_404() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/send-otp")
        .set_json(json!({"email": "nobody@example.com"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Email not found in our system");
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_send_otp_delivers_email() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(signup_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/send-otp")
        .set_json(send_otp_body())
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "OTP Sent Successfully");
    assert_eq!(body["data"]["email"], "priya@example.com");
    assert_eq!(body["data"]["name"], "Priya Sharma");
    assert!(body["data"]["user_id"].as_i64().unwrap() >= 1);

    let sent = ctx.email_service.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "priya@example.com");
    assert_eq!(sent[0].subject, OTP_EMAIL_SUBJECT);
}

#[actix_web::test]
async fn test_send_otp_delivery_failure_is_500() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(signup_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    ctx.email_service.set_should_fail(true);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/send-otp")
        .set_json(send_otp_body())
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Failed to send OTP");
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
}

#[actix_web::test]
async fn test_verify_otp_round_trip_marks_user_verified() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(signup_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/send-otp")
        .set_json(send_otp_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let code = extract_code(&ctx.email_service.sent()[0].html_body);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-otp")
        .set_json(json!({"email": "priya@example.com", "otp": code}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "OTP verified successfully");
    assert_eq!(body["data"]["email"], "priya@example.com");
    assert_eq!(body["data"]["name"], "Priya Sharma");

    let user = ctx
        .user_repository
        .find_by_email("priya@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(user.is_verified);
}

#[actix_web::test]
async fn test_verify_otp_accepts_numeric_json() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(signup_body())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/send-otp")
        .set_json(send_otp_body())
        .to_request();
    test::call_service(&app, req).await;

    // JSON numbers drop leading zeros; candidate normalization pads the
    // digits back out, so the numeric form always verifies.
    let code: u64 = extract_code(&ctx.email_service.sent()[0].html_body)
        .parse()
        .unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-otp")
        .set_json(json!({"email": "priya@example.com", "otp": code}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_verify_otp_wrong_code_is_401() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(signup_body())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/send-otp")
        .set_json(send_otp_body())
        .to_request();
    test::call_service(&app, req).await;

    let code = extract_code(&ctx.email_service.sent()[0].html_body);
    let wrong = if code == "111111" { "222222" } else { "111111" };

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-otp")
        .set_json(json!({"email": "priya@example.com", "otp": wrong}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid OTP or OTP expired");
    assert_eq!(body["error"]["code"], "INVALID_OTP");
}

#[actix_web::test]
async fn test_verify_otp_is_single_use() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(signup_body())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/send-otp")
        .set_json(send_otp_body())
        .to_request();
    test::call_service(&app, req).await;

    let code = extract_code(&ctx.email_service.sent()[0].html_body);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-otp")
        .set_json(json!({"email": "priya@example.com", "otp": code.clone()}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // The match consumed the code; replaying it must fail.
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-otp")
        .set_json(json!({"email": "priya@example.com", "otp": code}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_verify_otp_unknown_email_is_404() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-otp")
        .set_json(json!({"email": "nobody@example.com", "otp": "123456"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User not found");
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_reissued_code_replaces_previous() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(signup_body())
        .to_request();
    test::call_service(&app, req).await;

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/send-otp")
            .set_json(send_otp_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let sent = ctx.email_service.sent();
    assert_eq!(sent.len(), 2);
    let first = extract_code(&sent[0].html_body);
    let second = extract_code(&sent[1].html_body);

    // Only the most recently issued code can verify.
    if first != second {
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/verify-otp")
            .set_json(json!({"email": "priya@example.com", "otp": first}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-otp")
        .set_json(json!({"email": "priya@example.com", "otp": second}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
