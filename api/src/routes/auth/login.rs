use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use jd_core::domain::entities::{Affiliate, User};
use jd_core::repositories::{AccountStore, RoleRepository, SettingRepository};
use jd_core::services::captcha::CaptchaVerifier;
use jd_core::services::email::EmailSender;
use jd_shared::types::response::ApiResponse;

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::{bad_request, domain_error_response};
use crate::handlers::extract_client_ip;
use crate::state::AppState;

/// Handler for POST /api/auth/login
///
/// Validates the captcha, resolves the account by username or email,
/// checks the password, and returns a signed bearer token.
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

    tracing::info!(client_ip = %client_ip, "processing user login");

    match state
        .user_auth
        .login(&body.username_or_email, &body.password, &body.captcha_token)
        .await
    {
        Ok(auth) => HttpResponse::Ok().json(ApiResponse::success(LoginResponse {
            token: auth.token,
        })),
        Err(error) => domain_error_response(&error),
    }
}
