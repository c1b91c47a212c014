//! Affiliate entity, structurally parallel to a user account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::AccountRecord;

/// Affiliate partner account backed by the `affiliates` table
///
/// Affiliates do not reference the roles table; every affiliate carries
/// the fixed role name `Affiliate` in issued tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Affiliate {
    /// Unique identifier for the affiliate
    pub id: i64,

    /// Login username
    pub username: String,

    /// Email address
    pub email: String,

    /// Given name
    pub first_name: String,

    /// Stored password, reversibly encrypted with the configured key
    pub password: String,

    /// Whether the account may log in
    pub is_active: bool,

    /// Most recently issued password-reset code, if any
    pub otp: Option<String>,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Affiliate {
    /// Creates a new Affiliate instance
    pub fn new(
        id: i64,
        username: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            username: username.into(),
            email: email.into(),
            first_name: first_name.into(),
            password: password.into(),
            is_active: true,
            otp: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Deactivates the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}

impl AccountRecord for Affiliate {
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
