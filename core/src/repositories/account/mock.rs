//! In-memory mock implementations of `AccountStore` for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Affiliate, User};
use crate::errors::{DomainError, DomainResult};

use super::store::AccountStore;

/// Mock user store backed by a vector
pub struct MockUserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl MockUserStore {
    /// Create an empty mock store
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store seeded with one user
    pub fn with_user(user: User) -> Self {
        let store = Self::new();
        store
            .users
            .try_write()
            .expect("unshared lock")
            .push(user);
        store
    }

    /// Add a user to the store
    pub async fn add(&self, user: User) {
        self.users.write().await.push(user);
    }

    /// Snapshot of a stored user, for asserting on persisted state
    pub async fn get(&self, email: &str) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }
}

impl Default for MockUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for MockUserStore {
    type Record = User;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn update_otp(&self, email: &str, otp: &str) -> DomainResult<()> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.email == email) {
            Some(user) => {
                user.otp = Some(otp.to_string());
                Ok(())
            }
            None => Err(DomainError::NotFound {
                resource: "User".to_string(),
            }),
        }
    }

    async fn otp_for(&self, email: &str) -> DomainResult<Option<String>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.email == email)
            .and_then(|u| u.otp.clone()))
    }

    async fn update_password(&self, email: &str, encrypted_password: &str) -> DomainResult<()> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.email == email) {
            Some(user) => {
                user.password = encrypted_password.to_string();
                Ok(())
            }
            None => Err(DomainError::NotFound {
                resource: "User".to_string(),
            }),
        }
    }
}

/// Mock affiliate store backed by a vector
pub struct MockAffiliateStore {
    affiliates: Arc<RwLock<Vec<Affiliate>>>,
}

impl MockAffiliateStore {
    /// Create an empty mock store
    pub fn new() -> Self {
        Self {
            affiliates: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store seeded with one affiliate
    pub fn with_affiliate(affiliate: Affiliate) -> Self {
        let store = Self::new();
        store
            .affiliates
            .try_write()
            .expect("unshared lock")
            .push(affiliate);
        store
    }

    /// Add an affiliate to the store
    pub async fn add(&self, affiliate: Affiliate) {
        self.affiliates.write().await.push(affiliate);
    }

    /// Snapshot of a stored affiliate, for asserting on persisted state
    pub async fn get(&self, email: &str) -> Option<Affiliate> {
        self.affiliates
            .read()
            .await
            .iter()
            .find(|a| a.email == email)
            .cloned()
    }
}

impl Default for MockAffiliateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for MockAffiliateStore {
    type Record = Affiliate;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Affiliate>> {
        let affiliates = self.affiliates.read().await;
        Ok(affiliates.iter().find(|a| a.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Affiliate>> {
        let affiliates = self.affiliates.read().await;
        Ok(affiliates.iter().find(|a| a.username == username).cloned())
    }

    async fn update_otp(&self, email: &str, otp: &str) -> DomainResult<()> {
        let mut affiliates = self.affiliates.write().await;
        match affiliates.iter_mut().find(|a| a.email == email) {
            Some(affiliate) => {
                affiliate.otp = Some(otp.to_string());
                Ok(())
            }
            None => Err(DomainError::NotFound {
                resource: "Affiliate".to_string(),
            }),
        }
    }

    async fn otp_for(&self, email: &str) -> DomainResult<Option<String>> {
        let affiliates = self.affiliates.read().await;
        Ok(affiliates
            .iter()
            .find(|a| a.email == email)
            .and_then(|a| a.otp.clone()))
    }

    async fn update_password(&self, email: &str, encrypted_password: &str) -> DomainResult<()> {
        let mut affiliates = self.affiliates.write().await;
        match affiliates.iter_mut().find(|a| a.email == email) {
            Some(affiliate) => {
                affiliate.password = encrypted_password.to_string();
                Ok(())
            }
            None => Err(DomainError::NotFound {
                resource: "Affiliate".to_string(),
            }),
        }
    }
}
