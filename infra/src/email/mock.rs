//! Mock email sender for tests and local development.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use jd_core::services::email::EmailSender;

/// A delivery captured by the mock sender
#[derive(Debug, Clone)]
pub struct CapturedEmail {
    pub name: String,
    pub email: String,
    pub otp: String,
    pub template: String,
}

/// Email sender that records deliveries instead of sending them
pub struct MockEmailSender {
    sent: Arc<Mutex<Vec<CapturedEmail>>>,
}

impl MockEmailSender {
    /// Create a new recording sender
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The most recent delivery, if any
    pub fn last_sent(&self) -> Option<CapturedEmail> {
        self.sent.lock().unwrap().last().cloned()
    }
}

impl Default for MockEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_forgot_password_otp(
        &self,
        name: &str,
        email: &str,
        otp: &str,
        template: &str,
    ) -> Result<String, String> {
        tracing::debug!(to = email, "mock email sender captured delivery");
        self.sent.lock().unwrap().push(CapturedEmail {
            name: name.to_string(),
            email: email.to_string(),
            otp: otp.to_string(),
            template: template.to_string(),
        });
        Ok("mock-message-id".to_string())
    }
}
