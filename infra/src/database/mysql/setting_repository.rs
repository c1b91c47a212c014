//! MySQL implementation of the setting repository.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use jd_core::domain::entities::Setting;
use jd_core::errors::{DomainError, DomainResult};
use jd_core::repositories::SettingRepository;

/// MySQL-backed `SettingRepository` over the `settings` table
///
/// Lookups hit the database on every call; settings are deliberately
/// not cached so operators can rotate the captcha secret or edit the
/// email template without a restart.
pub struct MySqlSettingRepository {
    pool: MySqlPool,
}

impl MySqlSettingRepository {
    /// Create a new MySQL setting repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingRepository for MySqlSettingRepository {
    async fn get_by_name(&self, name: &str) -> DomainResult<Option<Setting>> {
        let result = sqlx::query("SELECT name, value FROM settings WHERE name = ? LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Setting {
                name: row.try_get("name").map_err(|e| DomainError::Database {
                    message: format!("Failed to get name: {}", e),
                })?,
                value: row.try_get("value").map_err(|e| DomainError::Database {
                    message: format!("Failed to get value: {}", e),
                })?,
            })),
            None => Ok(None),
        }
    }
}
