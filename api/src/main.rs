use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use jd_api::app::create_app;
use jd_api::state::AppState;
use jd_core::services::encryption::PasswordCipher;
use jd_core::services::token::TokenService;
use jd_infra::captcha::RecaptchaHttpVerifier;
use jd_infra::database::{
    DatabasePool, MySqlAffiliateRepository, MySqlRoleRepository, MySqlSettingRepository,
    MySqlUserRepository,
};
use jd_infra::email::HttpEmailSender;
use jd_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Starting Jobdesk API server");

    // Load configuration once; services receive it explicitly
    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();

    // Database pool and repositories
    let db = DatabasePool::new(&config.database).await?;
    db.health_check().await?;
    let users = Arc::new(MySqlUserRepository::new(db.pool().clone()));
    let affiliates = Arc::new(MySqlAffiliateRepository::new(db.pool().clone()));
    let roles = Arc::new(MySqlRoleRepository::new(db.pool().clone()));
    let settings = Arc::new(MySqlSettingRepository::new(db.pool().clone()));

    // External collaborators
    let captcha_verifier = Arc::new(RecaptchaHttpVerifier::new(config.captcha.clone())?);
    let email = Arc::new(HttpEmailSender::new(config.email.clone())?);

    // Domain services
    let tokens = Arc::new(TokenService::new(config.jwt.clone()));
    let cipher = Arc::new(PasswordCipher::new(&config.encryption)?);

    let state = web::Data::new(AppState::new(
        users,
        affiliates,
        roles,
        settings,
        captcha_verifier,
        email,
        tokens,
        cipher,
    ));

    info!(address = %bind_address, "server listening");

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
