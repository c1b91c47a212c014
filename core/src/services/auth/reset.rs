//! OTP-based password-reset service.
//!
//! The flow is three independently callable steps with no server-side
//! session: the account's stored OTP column is the only state carrier.
//! Concurrent requests for one account race at the database and the last
//! writer wins, which matches the overwrite semantics below.

use constant_time_eq::constant_time_eq;
use std::sync::Arc;

use crate::domain::entities::AccountRecord;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{AccountStore, SettingRepository};
use crate::services::email::EmailSender;
use crate::services::encryption::PasswordCipher;

use super::config::PasswordResetConfig;
use super::otp::generate_otp;

/// Settings-table name of the forgot-password email template
pub const FORGOT_PASSWORD_TEMPLATE_SETTING: &str = "ForgotPasswordEmailTemplate";

/// Password-reset service shared by users and affiliates
pub struct PasswordResetService<S, T, E>
where
    S: AccountStore,
    T: SettingRepository,
    E: EmailSender,
{
    /// Credential store for this account type
    accounts: Arc<S>,
    /// Settings store for the email template
    settings: Arc<T>,
    /// Outbound email collaborator
    email: Arc<E>,
    /// Stored-password cipher, for encrypting the new password on write
    cipher: Arc<PasswordCipher>,
    /// Per-account-type configuration
    config: PasswordResetConfig,
}

impl<S, T, E> PasswordResetService<S, T, E>
where
    S: AccountStore,
    T: SettingRepository,
    E: EmailSender,
{
    /// Create a new password-reset service
    pub fn new(
        accounts: Arc<S>,
        settings: Arc<T>,
        email: Arc<E>,
        cipher: Arc<PasswordCipher>,
        config: PasswordResetConfig,
    ) -> Self {
        Self {
            accounts,
            settings,
            email,
            cipher,
            config,
        }
    }

    /// Issue a one-time code and email it to the account
    ///
    /// This method:
    /// 1. Looks up the account by email
    /// 2. Generates a 6-digit code and stores it, overwriting any prior
    ///    code; only the newest code verifies
    /// 3. Fetches the email template from the settings store
    /// 4. Delivers the code
    ///
    /// A template or delivery failure past step 2 is reported to the
    /// caller but the stored code is NOT rolled back: the account is left
    /// in "OTP issued but undelivered".
    pub async fn forgot_password(&self, email: &str) -> DomainResult<()> {
        // Step 1: The address must belong to a registered account
        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or(AuthError::EmailNotRegistered)?;

        if self.config.require_active && !account.is_active() {
            return Err(AuthError::AccountInactive.into());
        }

        // Step 2: Overwrite any previously issued code
        let otp = generate_otp();
        if let Err(e) = self.accounts.update_otp(email, &otp).await {
            tracing::error!(account_id = account.id(), error = %e, "failed to store OTP");
            return Err(AuthError::OtpUpdateFailed.into());
        }

        // Step 3: Template comes from the settings table, per request
        let template = match self
            .settings
            .get_by_name(FORGOT_PASSWORD_TEMPLATE_SETTING)
            .await?
        {
            Some(setting) if !setting.value.is_empty() => setting.value,
            _ => {
                tracing::error!(
                    setting = FORGOT_PASSWORD_TEMPLATE_SETTING,
                    "forgot-password email template missing"
                );
                return Err(AuthError::EmailTemplateMissing.into());
            }
        };

        // Step 4: Deliver. The code stays stored even if this fails.
        if let Err(e) = self
            .email
            .send_forgot_password_otp(account.first_name(), account.email(), &otp, &template)
            .await
        {
            tracing::error!(account_id = account.id(), error = %e, "failed to send OTP email");
            return Err(AuthError::OtpSendFailed.into());
        }

        tracing::info!(account_id = account.id(), "password-reset code issued");
        Ok(())
    }

    /// Verify a submitted one-time code against the stored value
    ///
    /// Succeeds iff the submitted code exactly equals the most recently
    /// stored code. Codes do not expire and attempts are not counted;
    /// a code stays valid until superseded by a new request.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> DomainResult<()> {
        let stored = self.accounts.otp_for(email).await?;

        match stored {
            Some(stored)
                if !stored.is_empty()
                    && !otp.is_empty()
                    && constant_time_eq(stored.as_bytes(), otp.as_bytes()) =>
            {
                Ok(())
            }
            _ => Err(AuthError::InvalidOtp.into()),
        }
    }

    /// Persist a new password for the account
    ///
    /// The new password is encrypted with the configured key before the
    /// write, for both account types, so the decrypt-and-compare login
    /// step round-trips.
    pub async fn reset_password(&self, email: &str, new_password: &str) -> DomainResult<()> {
        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        if self.config.require_active && !account.is_active() {
            return Err(AuthError::AccountInactive.into());
        }

        let encrypted = self.cipher.encrypt(new_password)?;
        self.accounts.update_password(email, &encrypted).await?;

        tracing::info!(account_id = account.id(), "password reset");
        Ok(())
    }
}
