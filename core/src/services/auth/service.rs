//! Login service implementation.

use constant_time_eq::constant_time_eq;
use std::sync::Arc;

use crate::domain::entities::AccountRecord;
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{AccountStore, SettingRepository};
use crate::services::captcha::{CaptchaService, CaptchaVerifier};
use crate::services::encryption::PasswordCipher;
use crate::services::token::TokenService;

use super::resolver::resolve_account;
use super::roles::RoleResolver;

/// Authentication service for the credential-validation flow
///
/// Generic over the account store and role resolver, so the same
/// implementation serves user logins (role looked up by id) and
/// affiliate logins (fixed role name).
pub struct AuthService<S, R, V, T>
where
    S: AccountStore,
    R: RoleResolver<S::Record>,
    V: CaptchaVerifier,
    T: SettingRepository,
{
    /// Credential store for this account type
    accounts: Arc<S>,
    /// Role resolution strategy
    roles: Arc<R>,
    /// Captcha validation (fail-closed)
    captcha: Arc<CaptchaService<V, T>>,
    /// Token issuer
    tokens: Arc<TokenService>,
    /// Stored-password cipher
    cipher: Arc<PasswordCipher>,
}

impl<S, R, V, T> AuthService<S, R, V, T>
where
    S: AccountStore,
    R: RoleResolver<S::Record>,
    V: CaptchaVerifier,
    T: SettingRepository,
{
    /// Create a new authentication service
    pub fn new(
        accounts: Arc<S>,
        roles: Arc<R>,
        captcha: Arc<CaptchaService<V, T>>,
        tokens: Arc<TokenService>,
        cipher: Arc<PasswordCipher>,
    ) -> Self {
        Self {
            accounts,
            roles,
            captcha,
            tokens,
            cipher,
        }
    }

    /// Validate credentials and issue a bearer token
    ///
    /// This method:
    /// 1. Validates the captcha token (fail-closed)
    /// 2. Resolves the account by email, or username with email fallback
    /// 3. Rejects inactive accounts
    /// 4. Decrypts the stored password and compares it to the submitted one
    /// 5. Resolves the account's role and issues a signed token
    ///
    /// No token is issued unless every step succeeds.
    pub async fn login(
        &self,
        username_or_email: &str,
        password: &str,
        captcha_token: &str,
    ) -> DomainResult<AuthResponse> {
        // Step 1: Captcha, before any credential work
        if !self.captcha.validate(captcha_token).await {
            tracing::warn!("login rejected: captcha validation failed");
            return Err(AuthError::CaptchaValidationFailed.into());
        }

        // Step 2: Resolve the account
        let account = resolve_account(self.accounts.as_ref(), username_or_email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        // Step 3: Soft-deactivated accounts may not log in
        if !account.is_active() {
            tracing::warn!(account_id = account.id(), "login rejected: account inactive");
            return Err(AuthError::AccountInactive.into());
        }

        // Step 4: Decrypt-and-compare. A decrypt failure is an internal
        // error (corrupt row or wrong key), not a credential mismatch.
        let stored_password = self.cipher.decrypt(account.encrypted_password())?;
        if !constant_time_eq(stored_password.as_bytes(), password.as_bytes()) {
            tracing::warn!(account_id = account.id(), "login rejected: bad password");
            return Err(AuthError::InvalidCredentials.into());
        }

        // Step 5: Role lookup and token issuance
        let role = self.roles.role_name(&account).await?;
        let token = self.tokens.issue(&account, &role)?;

        tracing::info!(account_id = account.id(), role = %role, "login succeeded");
        Ok(AuthResponse::new(token))
    }
}
