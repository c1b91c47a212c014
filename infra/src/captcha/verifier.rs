//! reCAPTCHA verification client.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use jd_core::services::captcha::CaptchaVerifier;
use jd_shared::config::CaptchaConfig;

use crate::InfrastructureError;

/// Typed shape of the provider's verification reply
///
/// Only `success` matters; the provider also returns hostname,
/// timestamp, and error codes that this service does not act on.
#[derive(Debug, Deserialize)]
struct SiteVerifyResponse {
    success: bool,
    #[serde(rename = "error-codes", default)]
    error_codes: Vec<String>,
}

/// HTTP client for the reCAPTCHA `siteverify` endpoint
pub struct RecaptchaHttpVerifier {
    client: reqwest::Client,
    config: CaptchaConfig,
}

impl RecaptchaHttpVerifier {
    /// Create a new verifier from configuration
    pub fn new(config: CaptchaConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| InfrastructureError::Captcha(format!("Failed to build client: {}", e)))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl CaptchaVerifier for RecaptchaHttpVerifier {
    async fn verify(&self, secret: &str, token: &str) -> Result<bool, String> {
        // The provider expects the secret and response in the query
        // string of an empty-bodied POST.
        let response = self
            .client
            .post(&self.config.verify_url)
            .query(&[("secret", secret), ("response", token)])
            .send()
            .await
            .map_err(|e| format!("verification request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(format!(
                "verification endpoint returned {}",
                response.status()
            ));
        }

        let reply: SiteVerifyResponse = response
            .json()
            .await
            .map_err(|e| format!("malformed verification reply: {}", e))?;

        if !reply.success && !reply.error_codes.is_empty() {
            tracing::debug!(error_codes = ?reply.error_codes, "captcha rejected by provider");
        }

        Ok(reply.success)
    }
}
