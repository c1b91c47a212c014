//! Captcha verification configuration

use serde::{Deserialize, Serialize};

/// Configuration for the outbound captcha verification call
///
/// The secret key itself is not configured here: it lives in the settings
/// table and is fetched by name on every request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaptchaConfig {
    /// Verification endpoint URL
    pub verify_url: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for CaptchaConfig {
    fn default() -> Self {
        Self {
            verify_url: String::from("https://www.google.com/recaptcha/api/siteverify"),
            request_timeout_secs: 10,
        }
    }
}

impl CaptchaConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            verify_url: std::env::var("CAPTCHA_VERIFY_URL").unwrap_or(defaults.verify_url),
            request_timeout_secs: std::env::var("CAPTCHA_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}
