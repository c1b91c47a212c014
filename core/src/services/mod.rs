//! Business services containing domain logic and use cases.

pub mod auth;
pub mod captcha;
pub mod email;
pub mod encryption;
pub mod token;

// Re-export commonly used types
pub use auth::{
    generate_otp, resolve_account, AuthService, LookupRoleResolver, PasswordResetConfig,
    PasswordResetService, RoleResolver, StaticRoleResolver, AFFILIATE_ROLE_NAME,
};
pub use captcha::{CaptchaService, CaptchaVerifier, CAPTCHA_SECRET_SETTING};
pub use email::EmailSender;
pub use encryption::PasswordCipher;
pub use token::TokenService;
