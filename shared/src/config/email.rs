//! Email delivery configuration

use serde::{Deserialize, Serialize};

/// Configuration for the HTTP mail-delivery API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Mail API endpoint URL
    pub endpoint_url: String,

    /// API key sent as a bearer credential
    pub api_key: String,

    /// Sender address
    pub from_address: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            endpoint_url: String::from("http://localhost:8025/api/send"),
            api_key: String::new(),
            from_address: String::from("no-reply@jobdesk.example"),
            request_timeout_secs: 15,
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            endpoint_url: std::env::var("EMAIL_ENDPOINT_URL").unwrap_or(defaults.endpoint_url),
            api_key: std::env::var("EMAIL_API_KEY").unwrap_or(defaults.api_key),
            from_address: std::env::var("EMAIL_FROM_ADDRESS").unwrap_or(defaults.from_address),
            request_timeout_secs: std::env::var("EMAIL_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}
