//! Credential store capability interface.
//!
//! One trait serves both account types: the login and password-reset
//! services are generic over it, so the username-then-email resolution
//! and the whole OTP state machine exist exactly once.

use async_trait::async_trait;

use crate::domain::entities::AccountRecord;
use crate::errors::DomainResult;

/// Persistence operations for one account type (users or affiliates)
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// The account entity this store manages
    type Record: AccountRecord;

    /// Find an account by its email address
    ///
    /// # Returns
    /// * `Ok(Some(record))` - Account found
    /// * `Ok(None)` - No account with that email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Self::Record>>;

    /// Find an account by its username
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Self::Record>>;

    /// Store a one-time code against the account, overwriting any prior
    /// value; only the most recently stored code verifies
    async fn update_otp(&self, email: &str, otp: &str) -> DomainResult<()>;

    /// The currently stored one-time code for the account, if any
    async fn otp_for(&self, email: &str) -> DomainResult<Option<String>>;

    /// Persist a new password (already encrypted by the caller)
    async fn update_password(&self, email: &str, encrypted_password: &str) -> DomainResult<()>;
}
