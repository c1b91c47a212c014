//! Error types for authentication and token operations.
//!
//! The `#[error]` strings double as the messages returned to API clients,
//! so several of them are fixed phrases the frontend matches on.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Captcha validation failed")]
    CaptchaValidationFailed,

    #[error("User not found.")]
    AccountNotFound,

    #[error("User is not active")]
    AccountInactive,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email not found. Please register first.")]
    EmailNotRegistered,

    #[error("Invalid OTP.")]
    InvalidOtp,

    #[error("Failed to update OTP.")]
    OtpUpdateFailed,

    #[error("Email template not found.")]
    EmailTemplateMissing,

    #[error("Failed to send OTP.")]
    OtpSendFailed,

    #[error("Role not found")]
    RoleNotFound,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
