//! Collaborator trait for the external captcha verification call.

use async_trait::async_trait;

/// Outbound captcha verification collaborator
///
/// Implementations call the provider's verification endpoint with the
/// shared secret and the client-supplied token and report the decoded
/// `success` field. Transport and decode failures surface as `Err` and
/// are collapsed to a failed validation by `CaptchaService`.
#[async_trait]
pub trait CaptchaVerifier: Send + Sync {
    /// Verify a client token against the provider
    async fn verify(&self, secret: &str, token: &str) -> Result<bool, String>;
}
