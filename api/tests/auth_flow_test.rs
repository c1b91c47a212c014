//! HTTP-level tests of the authentication endpoints, wired to the
//! in-memory stores and mock collaborators through the production
//! application factory.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};
use serde_json::{json, Value};

use jd_api::app::create_app;
use jd_api::state::AppState;
use jd_core::domain::entities::{Affiliate, Role, User};
use jd_core::repositories::{
    MockAffiliateStore, MockRoleRepository, MockSettingRepository, MockUserStore,
};
use jd_core::services::auth::FORGOT_PASSWORD_TEMPLATE_SETTING;
use jd_core::services::captcha::CAPTCHA_SECRET_SETTING;
use jd_core::services::encryption::PasswordCipher;
use jd_core::services::token::TokenService;
use jd_infra::captcha::MockCaptchaVerifier;
use jd_infra::email::MockEmailSender;
use jd_shared::config::JwtConfig;

const PASSWORD: &str = "p@ssw0rd!";

type TestState = web::Data<
    AppState<
        MockUserStore,
        MockAffiliateStore,
        MockRoleRepository,
        MockCaptchaVerifier,
        MockSettingRepository,
        MockEmailSender,
    >,
>;

struct Harness {
    state: TestState,
    email: Arc<MockEmailSender>,
}

async fn harness(captcha_ok: bool) -> Harness {
    let cipher = Arc::new(PasswordCipher::from_key_bytes(&[9u8; 32]).unwrap());

    let users = Arc::new(MockUserStore::with_user(User::new(
        1,
        "jdoe",
        "a@b.com",
        "Jane",
        cipher.encrypt(PASSWORD).unwrap(),
        2,
    )));
    let mut inactive = User::new(
        2,
        "idle",
        "inactive@b.com",
        "Ira",
        cipher.encrypt(PASSWORD).unwrap(),
        2,
    );
    inactive.deactivate();
    users.add(inactive).await;

    let affiliates = Arc::new(MockAffiliateStore::with_affiliate(Affiliate::new(
        9,
        "acme",
        "acme@partners.com",
        "Ada",
        cipher.encrypt(PASSWORD).unwrap(),
    )));

    let roles = Arc::new(MockRoleRepository::new().with_role(Role::new(2, "Recruiter")));
    let settings = Arc::new(
        MockSettingRepository::new()
            .with_setting(CAPTCHA_SECRET_SETTING, "secret")
            .with_setting(FORGOT_PASSWORD_TEMPLATE_SETTING, "Hi {name}, code: {otp}"),
    );
    let verifier = Arc::new(if captcha_ok {
        MockCaptchaVerifier::accepting()
    } else {
        MockCaptchaVerifier::rejecting()
    });
    let email = Arc::new(MockEmailSender::new());
    let tokens = Arc::new(TokenService::new(JwtConfig {
        secret: "api-test-secret".to_string(),
        token_expiry: 3600,
        issuer: "jobdesk".to_string(),
        audience: "jobdesk-api".to_string(),
    }));

    let state = web::Data::new(AppState::new(
        users,
        affiliates,
        roles,
        settings,
        verifier,
        email.clone(),
        tokens,
        cipher,
    ));

    Harness { state, email }
}

#[actix_web::test]
async fn login_succeeds_with_valid_credentials() {
    let h = harness(true).await;
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "username_or_email": "a@b.com",
            "password": PASSWORD,
            "captcha_token": "tok",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    let token = body["data"]["token"].as_str().unwrap();
    assert!(!token.is_empty());
}

#[actix_web::test]
async fn login_with_username_also_succeeds() {
    let h = harness(true).await;
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "username_or_email": "jdoe",
            "password": PASSWORD,
            "captcha_token": "tok",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn login_inactive_account_is_401_with_message() {
    let h = harness(true).await;
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "username_or_email": "inactive@b.com",
            "password": PASSWORD,
            "captcha_token": "tok",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "User is not active");
}

#[actix_web::test]
async fn login_wrong_password_is_401() {
    let h = harness(true).await;
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "username_or_email": "a@b.com",
            "password": "nope",
            "captcha_token": "tok",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid credentials");
}

#[actix_web::test]
async fn login_unknown_account_is_404() {
    let h = harness(true).await;
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "username_or_email": "ghost@b.com",
            "password": PASSWORD,
            "captcha_token": "tok",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn login_rejected_captcha_is_401_and_no_token() {
    let h = harness(false).await;
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "username_or_email": "a@b.com",
            "password": PASSWORD,
            "captcha_token": "tok",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Captcha validation failed");
    assert!(body.get("data").is_none());
}

#[actix_web::test]
async fn login_missing_fields_is_400() {
    let h = harness(true).await;
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "username_or_email": "",
            "password": "",
            "captcha_token": "tok",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Username/Email and password are required");
}

#[actix_web::test]
async fn forgot_password_unknown_email_is_404_with_message() {
    let h = harness(true).await;
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/forgot-password")
        .set_json(json!({ "email": "ghost@b.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Email not found. Please register first.");
}

#[actix_web::test]
async fn otp_round_trip_verifies_only_latest_code() {
    let h = harness(true).await;
    let app = test::init_service(create_app(h.state.clone())).await;

    // Issue a code
    let req = test::TestRequest::post()
        .uri("/api/auth/forgot-password")
        .set_json(json!({ "email": "a@b.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let otp = h.email.last_sent().unwrap().otp;

    // A wrong code is rejected
    let req = test::TestRequest::post()
        .uri("/api/auth/verify-otp")
        .set_json(json!({ "email": "a@b.com", "otp": "000000" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid OTP.");

    // The delivered code verifies
    let req = test::TestRequest::post()
        .uri("/api/auth/verify-otp")
        .set_json(json!({ "email": "a@b.com", "otp": otp }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn reset_password_allows_login_with_new_password() {
    let h = harness(true).await;
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/reset-password")
        .set_json(json!({ "email": "a@b.com", "new_password": "brand new" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Old password rejected, new accepted
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "username_or_email": "a@b.com",
            "password": PASSWORD,
            "captcha_token": "tok",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "username_or_email": "a@b.com",
            "password": "brand new",
            "captcha_token": "tok",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn affiliate_login_succeeds() {
    let h = harness(true).await;
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/affiliate-auth/login")
        .set_json(json!({
            "username_or_email": "acme@partners.com",
            "password": PASSWORD,
            "captcha_token": "tok",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(!body["data"]["token"].as_str().unwrap().is_empty());
}

#[actix_web::test]
async fn affiliate_forgot_password_delivers_code() {
    let h = harness(true).await;
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/affiliate-auth/forgot-password")
        .set_json(json!({ "email": "acme@partners.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let sent = h.email.last_sent().unwrap();
    assert_eq!(sent.email, "acme@partners.com");
    assert_eq!(sent.otp.len(), 6);
}

#[actix_web::test]
async fn verify_otp_missing_fields_is_400() {
    let h = harness(true).await;
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/verify-otp")
        .set_json(json!({ "email": "a@b.com", "otp": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Email and OTP are required.");
}

#[actix_web::test]
async fn health_endpoint_reports_healthy() {
    let h = harness(true).await;
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "jobdesk-api");
}
