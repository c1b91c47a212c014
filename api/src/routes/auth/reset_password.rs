use actix_web::{web, HttpResponse};

use jd_core::domain::entities::{Affiliate, User};
use jd_core::repositories::{AccountStore, RoleRepository, SettingRepository};
use jd_core::services::captcha::CaptchaVerifier;
use jd_core::services::email::EmailSender;
use jd_shared::types::response::ApiResponse;

use crate::dto::auth::ResetPasswordRequest;
use crate::handlers::error::{bad_request, domain_error_response};
use crate::state::AppState;

/// Handler for POST /api/auth/reset-password
///
/// Persists a new password for the account; the value is encrypted
/// before the write.
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
        .user_reset
        .reset_password(&body.email, &body.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::ok()),
        Err(error) => domain_error_response(&error),
    }
}
