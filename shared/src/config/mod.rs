//! Configuration modules for the Jobdesk server
//!
//! Every tunable lives in a typed struct with a `from_env` constructor and
//! sensible defaults. Services receive these structs explicitly at
//! construction time; nothing reads the environment after startup.

pub mod auth;
pub mod captcha;
pub mod database;
pub mod email;
pub mod server;

pub use auth::{EncryptionConfig, JwtConfig};
pub use captcha::CaptchaConfig;
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use server::ServerConfig;

/// Aggregated application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub encryption: EncryptionConfig,
    pub captcha: CaptchaConfig,
    pub email: EmailConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            encryption: EncryptionConfig::from_env(),
            captcha: CaptchaConfig::from_env(),
            email: EmailConfig::from_env(),
        }
    }
}
