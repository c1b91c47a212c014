use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username or email address; anything containing '@' is treated as
    /// an email
    #[validate(length(min = 1, max = 254))]
    pub username_or_email: String,

    /// Plaintext password
    #[validate(length(min = 1, max = 128))]
    pub password: String,

    /// Client-side captcha token
    #[validate(length(min = 1))]
    pub captcha_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(length(min = 1, max = 254))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(length(min = 1, max = 254))]
    pub email: String,

    /// Code from the reset email; anything but an exact match of the
    /// stored 6-digit value is rejected downstream with a 401
    #[validate(length(min = 1, max = 16))]
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1, max = 254))]
    pub email: String,

    #[validate(length(min = 1, max = 128))]
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
