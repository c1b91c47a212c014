//! HTTP mail-delivery client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use jd_core::services::email::EmailSender;
use jd_shared::config::EmailConfig;

use crate::InfrastructureError;

const FORGOT_PASSWORD_SUBJECT: &str = "Your password reset code";

/// Outbound message payload for the mail API
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: String,
}

/// Reply from the mail API
#[derive(Debug, Deserialize)]
struct SendReply {
    id: String,
}

/// Email sender backed by an HTTP mail-delivery API
///
/// Templates come from the settings table with `{name}` and `{otp}`
/// placeholders; rendering happens here so the domain layer never sees
/// markup.
pub struct HttpEmailSender {
    client: reqwest::Client,
    config: EmailConfig,
}

impl HttpEmailSender {
    /// Create a new sender from configuration
    pub fn new(config: EmailConfig) -> Result<Self, InfrastructureError> {
        if config.endpoint_url.is_empty() {
            return Err(InfrastructureError::Config(
                "EMAIL_ENDPOINT_URL is not set".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| InfrastructureError::Email(format!("Failed to build client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn render(template: &str, name: &str, otp: &str) -> String {
        template.replace("{name}", name).replace("{otp}", otp)
    }
}

#[async_trait]
impl EmailSender for HttpEmailSender {
    async fn send_forgot_password_otp(
        &self,
        name: &str,
        email: &str,
        otp: &str,
        template: &str,
    ) -> Result<String, String> {
        let payload = SendRequest {
            from: &self.config.from_address,
            to: email,
            subject: FORGOT_PASSWORD_SUBJECT,
            html: Self::render(template, name, otp),
        };

        let response = self
            .client
            .post(&self.config.endpoint_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| format!("mail API request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("mail API returned {}", response.status()));
        }

        let reply: SendReply = response
            .json()
            .await
            .map_err(|e| format!("malformed mail API reply: {}", e))?;

        tracing::info!(message_id = %reply.id, "forgot-password email accepted");
        Ok(reply.id)
    }
}
