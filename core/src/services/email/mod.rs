//! Collaborator trait for outbound email delivery.

use async_trait::async_trait;

/// Outbound email delivery collaborator
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Render the forgot-password template and deliver the one-time code
    ///
    /// # Arguments
    /// * `name` - Recipient's given name, substituted into the template
    /// * `email` - Recipient address
    /// * `otp` - The one-time code to deliver
    /// * `template` - Template body fetched from the settings store
    ///
    /// # Returns
    /// * `Ok(message_id)` - Provider-assigned message identifier
    /// * `Err(message)` - Delivery failed; the stored OTP is NOT rolled back
    async fn send_forgot_password_otp(
        &self,
        name: &str,
        email: &str,
        otp: &str,
        template: &str,
    ) -> Result<String, String>;
}
