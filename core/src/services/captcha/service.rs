//! Captcha validation service.

use std::sync::Arc;

use crate::repositories::SettingRepository;

use super::traits::CaptchaVerifier;

/// Settings-table name of the captcha secret key
pub const CAPTCHA_SECRET_SETTING: &str = "recaptchasecretkey";

/// Validates client captcha tokens, fail-closed
///
/// The secret is fetched from the settings store by name on every call.
/// A missing secret, a failed settings lookup, or a failed verification
/// call all collapse to `false`; callers never learn whether the captcha
/// was wrong or the validator was broken.
pub struct CaptchaService<V: CaptchaVerifier, S: SettingRepository> {
    verifier: Arc<V>,
    settings: Arc<S>,
}

impl<V: CaptchaVerifier, S: SettingRepository> CaptchaService<V, S> {
    /// Create a new captcha service
    pub fn new(verifier: Arc<V>, settings: Arc<S>) -> Self {
        Self { verifier, settings }
    }

    /// Validate a client-supplied captcha token
    pub async fn validate(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }

        let secret = match self.settings.get_by_name(CAPTCHA_SECRET_SETTING).await {
            Ok(Some(setting)) if !setting.value.is_empty() => setting.value,
            Ok(_) => {
                tracing::warn!(
                    setting = CAPTCHA_SECRET_SETTING,
                    "captcha secret is not configured"
                );
                return false;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load captcha secret");
                return false;
            }
        };

        match self.verifier.verify(&secret, token).await {
            Ok(success) => success,
            Err(e) => {
                tracing::error!(error = %e, "captcha verification call failed");
                false
            }
        }
    }
}
