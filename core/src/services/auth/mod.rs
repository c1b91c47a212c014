//! Authentication services: login, account resolution, and the
//! OTP-based password-reset flow.

mod config;
mod otp;
mod resolver;
mod reset;
mod roles;
mod service;

#[cfg(test)]
mod tests;

pub use config::PasswordResetConfig;
pub use otp::{generate_otp, OTP_LENGTH};
pub use resolver::resolve_account;
pub use reset::{PasswordResetService, FORGOT_PASSWORD_TEMPLATE_SETTING};
pub use roles::{LookupRoleResolver, RoleResolver, StaticRoleResolver, AFFILIATE_ROLE_NAME};
pub use service::AuthService;
