//! Role resolution at the seam between accounts and issued tokens.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::User;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::RoleRepository;

/// Role name carried by every affiliate token
pub const AFFILIATE_ROLE_NAME: &str = "Affiliate";

/// Resolves the role name to embed in an account's token
#[async_trait]
pub trait RoleResolver<A>: Send + Sync {
    /// The role name for this account
    async fn role_name(&self, account: &A) -> DomainResult<String>;
}

/// Resolves a user's role through the roles table
pub struct LookupRoleResolver<R: RoleRepository> {
    roles: Arc<R>,
}

impl<R: RoleRepository> LookupRoleResolver<R> {
    /// Create a resolver over a role repository
    pub fn new(roles: Arc<R>) -> Self {
        Self { roles }
    }
}

#[async_trait]
impl<R: RoleRepository> RoleResolver<User> for LookupRoleResolver<R> {
    async fn role_name(&self, account: &User) -> DomainResult<String> {
        let role = self
            .roles
            .find_by_id(account.role_id)
            .await?
            .ok_or(AuthError::RoleNotFound)?;
        Ok(role.name)
    }
}

/// Resolves every account to one fixed role name (used for affiliates)
pub struct StaticRoleResolver {
    name: String,
}

impl StaticRoleResolver {
    /// Create a resolver returning the given role name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The affiliate resolver
    pub fn affiliate() -> Self {
        Self::new(AFFILIATE_ROLE_NAME)
    }
}

#[async_trait]
impl<A: Send + Sync> RoleResolver<A> for StaticRoleResolver {
    async fn role_name(&self, _account: &A) -> DomainResult<String> {
        Ok(self.name.clone())
    }
}
