//! Role repository trait.

use async_trait::async_trait;

use crate::domain::entities::Role;
use crate::errors::DomainResult;

/// Read access to the roles table
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Find a role by its numeric identifier
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Role>>;
}
