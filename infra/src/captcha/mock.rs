//! Mock captcha verifier for tests and local development.

use async_trait::async_trait;

use jd_core::services::captcha::CaptchaVerifier;

/// Captcha verifier with a fixed verdict
pub struct MockCaptchaVerifier {
    accept: bool,
}

impl MockCaptchaVerifier {
    /// A verifier that accepts every token
    pub fn accepting() -> Self {
        Self { accept: true }
    }

    /// A verifier that rejects every token
    pub fn rejecting() -> Self {
        Self { accept: false }
    }
}

#[async_trait]
impl CaptchaVerifier for MockCaptchaVerifier {
    async fn verify(&self, _secret: &str, _token: &str) -> Result<bool, String> {
        Ok(self.accept)
    }
}
