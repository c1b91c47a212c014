use actix_web::{web, HttpResponse};

use jd_core::domain::entities::{Affiliate, User};
use jd_core::repositories::{AccountStore, RoleRepository, SettingRepository};
use jd_core::services::captcha::CaptchaVerifier;
use jd_core::services::email::EmailSender;
use jd_shared::types::response::ApiResponse;

use crate::dto::auth::VerifyOtpRequest;
use crate::handlers::error::{bad_request, domain_error_response};
use crate::state::AppState;

/// Handler for POST /api/auth/verify-otp
///
/// Succeeds only when the submitted code exactly equals the most
/// recently issued one. A wrong-length or stale code is a 401, not a
/// validation error; only absent fields are a 400.
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

    match state.user_reset.verify_otp(&body.email, &body.otp).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::ok()),
        Err(error) => domain_error_response(&error),
    }
}
