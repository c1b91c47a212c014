//! User entity representing a registered platform user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::AccountRecord;

/// User entity backed by the `users` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: i64,

    /// Login username
    pub username: String,

    /// Email address
    pub email: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: Option<String>,

    /// Stored password, reversibly encrypted with the configured key
    pub password: String,

    /// Whether the account may log in (soft-deactivation flag)
    pub is_active: bool,

    /// Role reference into the roles table
    pub role_id: i64,

    /// Most recently issued password-reset code, if any
    pub otp: Option<String>,

    /// Best-effort client IP recorded for the account
    pub ip_address: Option<String>,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(
        id: i64,
        username: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        password: impl Into<String>,
        role_id: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            username: username.into(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: None,
            password: password.into(),
            is_active: true,
            role_id,
            otp: None,
            ip_address: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Deactivates the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Stores a new one-time code, replacing any prior value
    pub fn set_otp(&mut self, otp: impl Into<String>) {
        self.otp = Some(otp.into());
        self.updated_at = Utc::now();
    }
}

impl AccountRecord for User {
    fn id(&self) -> i64 {
        self.id
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn encrypted_password(&self) -> &str {
        &self.password
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
