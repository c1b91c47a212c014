//! Application state: the wired service graph shared by all handlers.

use std::sync::Arc;

use jd_core::domain::entities::{Affiliate, User};
use jd_core::repositories::{AccountStore, RoleRepository, SettingRepository};
use jd_core::services::auth::{
    AuthService, LookupRoleResolver, PasswordResetConfig, PasswordResetService,
    StaticRoleResolver,
};
use jd_core::services::captcha::{CaptchaService, CaptchaVerifier};
use jd_core::services::email::EmailSender;
use jd_core::services::encryption::PasswordCipher;
use jd_core::services::token::TokenService;

/// Shared services, generic over every external collaborator so tests
/// can wire mocks through the same constructor as production
pub struct AppState<U, A, R, V, T, E>
where
    U: AccountStore<Record = User>,
    A: AccountStore<Record = Affiliate>,
    R: RoleRepository,
    V: CaptchaVerifier,
    T: SettingRepository,
    E: EmailSender,
{
    /// Login flow for users (role resolved through the roles table)
    pub user_auth: Arc<AuthService<U, LookupRoleResolver<R>, V, T>>,
    /// Password-reset flow for users
    pub user_reset: Arc<PasswordResetService<U, T, E>>,
    /// Login flow for affiliates (fixed role name)
    pub affiliate_auth: Arc<AuthService<A, StaticRoleResolver, V, T>>,
    /// Password-reset flow for affiliates
    pub affiliate_reset: Arc<PasswordResetService<A, T, E>>,
}

impl<U, A, R, V, T, E> AppState<U, A, R, V, T, E>
where
    U: AccountStore<Record = User>,
    A: AccountStore<Record = Affiliate>,
    R: RoleRepository,
    V: CaptchaVerifier,
    T: SettingRepository,
    E: EmailSender,
{
    /// Wire the full service graph from its collaborators
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        users: Arc<U>,
        affiliates: Arc<A>,
        roles: Arc<R>,
        settings: Arc<T>,
        captcha_verifier: Arc<V>,
        email: Arc<E>,
        tokens: Arc<TokenService>,
        cipher: Arc<PasswordCipher>,
    ) -> Self {
        let captcha = Arc::new(CaptchaService::new(captcha_verifier, settings.clone()));

        let user_auth = Arc::new(AuthService::new(
            users.clone(),
            Arc::new(LookupRoleResolver::new(roles)),
            captcha.clone(),
            tokens.clone(),
            cipher.clone(),
        ));
        let user_reset = Arc::new(PasswordResetService::new(
            users,
            settings.clone(),
            email.clone(),
            cipher.clone(),
            PasswordResetConfig::default(),
        ));

        let affiliate_auth = Arc::new(AuthService::new(
            affiliates.clone(),
            Arc::new(StaticRoleResolver::affiliate()),
            captcha,
            tokens,
            cipher.clone(),
        ));
        let affiliate_reset = Arc::new(PasswordResetService::new(
            affiliates,
            settings,
            email,
            cipher,
            PasswordResetConfig::for_affiliates(),
        ));

        Self {
            user_auth,
            user_reset,
            affiliate_auth,
            affiliate_reset,
        }
    }
}
