//! MySQL implementation of the role repository.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use jd_core::domain::entities::Role;
use jd_core::errors::{DomainError, DomainResult};
use jd_core::repositories::RoleRepository;

/// MySQL-backed `RoleRepository` over the `roles` table
pub struct MySqlRoleRepository {
    pool: MySqlPool,
}

impl MySqlRoleRepository {
    /// Create a new MySQL role repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for MySqlRoleRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Role>> {
        let result = sqlx::query("SELECT id, name FROM roles WHERE id = ? LIMIT 1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Role {
                id: row.try_get("id").map_err(|e| DomainError::Database {
                    message: format!("Failed to get id: {}", e),
                })?,
                name: row.try_get("name").map_err(|e| DomainError::Database {
                    message: format!("Failed to get name: {}", e),
                })?,
            })),
            None => Ok(None),
        }
    }
}
