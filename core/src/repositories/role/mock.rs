//! In-memory mock implementation of `RoleRepository` for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Role;
use crate::errors::DomainResult;

use super::repository::RoleRepository;

/// Mock role repository backed by a map
pub struct MockRoleRepository {
    roles: Arc<RwLock<HashMap<i64, Role>>>,
}

impl MockRoleRepository {
    /// Create an empty mock repository
    pub fn new() -> Self {
        Self {
            roles: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed a role, returning self for chaining
    pub fn with_role(self, role: Role) -> Self {
        self.roles
            .try_write()
            .expect("unshared lock")
            .insert(role.id, role);
        self
    }
}

impl Default for MockRoleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoleRepository for MockRoleRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Role>> {
        let roles = self.roles.read().await;
        Ok(roles.get(&id).cloned())
    }
}
