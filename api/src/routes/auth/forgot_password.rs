use actix_web::{web, HttpResponse};

use jd_core::domain::entities::{Affiliate, User};
use jd_core::repositories::{AccountStore, RoleRepository, SettingRepository};
use jd_core::services::captcha::CaptchaVerifier;
use jd_core::services::email::EmailSender;
use jd_shared::types::response::ApiResponse;
use jd_shared::utils::is_valid_email;

use crate::dto::auth::ForgotPasswordRequest;
use crate::handlers::error::{bad_request, domain_error_response};
use crate::state::AppState;

/// Handler for POST /api/auth/forgot-password
///
/// Issues a fresh one-time code for the account and emails it. The code
/// overwrites any previously issued one.
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

    match state.user_reset.forgot_password(&body.email).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::ok()),
        Err(error) => domain_error_response(&error),
    }
}
