//! Affiliate authentication routes: `/api/affiliate-auth/*`.
//!
//! Structurally parallel to the user routes; each handler delegates to
//! the affiliate-flavored services on the shared state (fixed role name,
//! active-account check in the reset flow).

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use jd_core::domain::entities::{Affiliate, User};
use jd_core::repositories::{AccountStore, RoleRepository, SettingRepository};
use jd_core::services::captcha::CaptchaVerifier;
use jd_core::services::email::EmailSender;
use jd_shared::types::response::ApiResponse;
use jd_shared::utils::is_valid_email;

use crate::dto::auth::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, ResetPasswordRequest, VerifyOtpRequest,
};
use crate::handlers::error::{bad_request, domain_error_response};
use crate::handlers::extract_client_ip;
use crate::state::AppState;

/// Handler for POST /api/affiliate-auth/login
pub async fn login<U, A, R, V, T, E>(
    req: HttpRequest,
    state: web::Data<AppState<U, A, R, V, T, E>>,
    body: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: AccountStore<Record = User> + 'static,
    A: AccountStore<Record = Affiliate> + 'static,
    R: RoleRepository + 'static,
    V: CaptchaVerifier + 'static,
    T: SettingRepository + 'static,
    E: EmailSender + 'static,
{
    let client_ip = extract_client_ip(&req);

    if body.username_or_email.trim().is_empty() || body.password.is_empty() {
        return bad_request("Username/Email and password are required");
    }
    if body.captcha_token.is_empty() {
        return bad_request("Captcha is required");
    }
    if body.validate().is_err() {
        return bad_request("Invalid request data");
    }

    tracing::info!(client_ip = %client_ip, "processing affiliate login");

    match state
        .affiliate_auth
        .login(&body.username_or_email, &body.password, &body.captcha_token)
        .await
    {
        Ok(auth) => HttpResponse::Ok().json(ApiResponse::success(LoginResponse {
            token: auth.token,
        })),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for POST /api/affiliate-auth/forgot-password
pub async fn forgot_password<U, A, R, V, T, E>(
    state: web::Data<AppState<U, A, R, V, T, E>>,
    body: web::Json<ForgotPasswordRequest>,
) -> HttpResponse
where
    U: AccountStore<Record = User> + 'static,
    A: AccountStore<Record = Affiliate> + 'static,
    R: RoleRepository + 'static,
    V: CaptchaVerifier + 'static,
    T: SettingRepository + 'static,
    E: EmailSender + 'static,
{
    if !is_valid_email(&body.email) {
        return bad_request("A valid email address is required.");
    }

    match state.affiliate_reset.forgot_password(&body.email).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::ok()),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for POST /api/affiliate-auth/verify-otp
pub async fn verify_otp<U, A, R, V, T, E>(
    state: web::Data<AppState<U, A, R, V, T, E>>,
    body: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    U: AccountStore<Record = User> + 'static,
    A: AccountStore<Record = Affiliate> + 'static,
    R: RoleRepository + 'static,
    V: CaptchaVerifier + 'static,
    T: SettingRepository + 'static,
    E: EmailSender + 'static,
{
    if body.email.trim().is_empty() || body.otp.trim().is_empty() {
        return bad_request("Email and OTP are required.");
    }

    match state
        .affiliate_reset
        .verify_otp(&body.email, &body.otp)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::ok()),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for POST /api/affiliate-auth/reset-password
pub async fn reset_password<U, A, R, V, T, E>(
    state: web::Data<AppState<U, A, R, V, T, E>>,
    body: web::Json<ResetPasswordRequest>,
) -> HttpResponse
where
    U: AccountStore<Record = User> + 'static,
    A: AccountStore<Record = Affiliate> + 'static,
    R: RoleRepository + 'static,
    V: CaptchaVerifier + 'static,
    T: SettingRepository + 'static,
    E: EmailSender + 'static,
{
    if body.email.trim().is_empty() || body.new_password.is_empty() {
        return bad_request("Email and password are required.");
    }

    match state
        .affiliate_reset
        .reset_password(&body.email, &body.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::ok()),
        Err(error) => domain_error_response(&error),
    }
}
