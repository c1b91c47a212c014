//! MySQL implementation of the user credential store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use jd_core::domain::entities::User;
use jd_core::errors::{DomainError, DomainResult};
use jd_core::repositories::AccountStore;

/// MySQL-backed `AccountStore` over the `users` table
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> DomainResult<User> {
        Ok(User {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get id: {}", e),
                })?,
            username: row
                .try_get("username")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get username: {}", e),
                })?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get email: {}", e),
                })?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get first_name: {}", e),
                })?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get last_name: {}", e),
                })?,
            password: row
                .try_get("password")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get password: {}", e),
                })?,
            is_active: row
                .try_get("is_active")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get is_active: {}", e),
                })?,
            role_id: row
                .try_get("role_id")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get role_id: {}", e),
                })?,
            otp: row
                .try_get("otp")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get otp: {}", e),
                })?,
            ip_address: row
                .try_get("ip_address")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get ip_address: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }

    async fn find_by_column(&self, column: &str, value: &str) -> DomainResult<Option<User>> {
        let query = format!(
            r#"
            SELECT id, username, email, first_name, last_name, password,
                   is_active, role_id, otp, ip_address, created_at, updated_at
            FROM users
            WHERE {} = ?
            LIMIT 1
            "#,
            column
        );

        let result = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl AccountStore for MySqlUserRepository {
    type Record = User;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        self.find_by_column("email", email).await
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        self.find_by_column("username", username).await
    }

    async fn update_otp(&self, email: &str, otp: &str) -> DomainResult<()> {
        let result = sqlx::query("UPDATE users SET otp = ?, updated_at = ? WHERE email = ?")
            .bind(otp)
            .bind(Utc::now())
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update OTP: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }

        Ok(())
    }

    async fn otp_for(&self, email: &str) -> DomainResult<Option<String>> {
        let result = sqlx::query("SELECT otp FROM users WHERE email = ? LIMIT 1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => row.try_get("otp").map_err(|e| DomainError::Database {
                message: format!("Failed to get otp: {}", e),
            }),
            None => Ok(None),
        }
    }

    async fn update_password(&self, email: &str, encrypted_password: &str) -> DomainResult<()> {
        let result = sqlx::query("UPDATE users SET password = ?, updated_at = ? WHERE email = ?")
            .bind(encrypted_password)
            .bind(Utc::now())
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update password: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }

        Ok(())
    }
}
