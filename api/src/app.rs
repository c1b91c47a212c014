//! Application factory.
//!
//! Builds the Actix application from a wired `AppState`; `main` passes
//! production implementations, tests pass mocks through the same path.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use jd_core::domain::entities::{Affiliate, User};
use jd_core::repositories::{AccountStore, RoleRepository, SettingRepository};
use jd_core::services::captcha::CaptchaVerifier;
use jd_core::services::email::EmailSender;

use crate::routes::{affiliate, auth};
use crate::state::AppState;

/// Create and configure the application with all routes
pub fn create_app<U, A, R, V, T, E>(
    state: web::Data<AppState<U, A, R, V, T, E>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            tracing_actix_web::StreamSpan<actix_web::body::BoxBody>,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: AccountStore<Record = User> + 'static,
    A: AccountStore<Record = Affiliate> + 'static,
    R: RoleRepository + 'static,
    V: CaptchaVerifier + 'static,
    T: SettingRepository + 'static,
    E: EmailSender + 'static,
{
    App::new()
        .app_data(state)
        .wrap(TracingLogger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API routes
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(auth::login::<U, A, R, V, T, E>))
                        .route(
                            "/forgot-password",
                            web::post().to(auth::forgot_password::<U, A, R, V, T, E>),
                        )
                        .route(
                            "/verify-otp",
                            web::post().to(auth::verify_otp::<U, A, R, V, T, E>),
                        )
                        .route(
                            "/reset-password",
                            web::post().to(auth::reset_password::<U, A, R, V, T, E>),
                        ),
                )
                .service(
                    web::scope("/affiliate-auth")
                        .route("/login", web::post().to(affiliate::login::<U, A, R, V, T, E>))
                        .route(
                            "/forgot-password",
                            web::post().to(affiliate::forgot_password::<U, A, R, V, T, E>),
                        )
                        .route(
                            "/verify-otp",
                            web::post().to(affiliate::verify_otp::<U, A, R, V, T, E>),
                        )
                        .route(
                            "/reset-password",
                            web::post().to(affiliate::reset_password::<U, A, R, V, T, E>),
                        ),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "jobdesk-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
