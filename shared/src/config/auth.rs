//! Authentication and encryption configuration

use serde::{Deserialize, Serialize};

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Token expiry time in seconds
    pub token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("change-me-in-production"),
            token_expiry: 86_400, // 24 hours
            issuer: String::from("jobdesk"),
            audience: String::from("jobdesk-api"),
        }
    }
}

impl JwtConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: std::env::var("JWT_SECRET").unwrap_or(defaults.secret),
            token_expiry: std::env::var("JWT_TOKEN_EXPIRY_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.token_expiry),
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or(defaults.audience),
        }
    }
}

/// Symmetric key configuration for the stored-password cipher
///
/// Stored passwords are reversibly encrypted with this key, not hashed;
/// login decrypts the stored value and compares plaintexts.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EncryptionConfig {
    /// Base64-encoded 32-byte AES-256 key
    pub key: String,
}

impl EncryptionConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            key: std::env::var("ENCRYPTION_KEY").unwrap_or_default(),
        }
    }
}
