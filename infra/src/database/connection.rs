//! Database connection pool management.
//!
//! Connections are pool-scoped: each request acquires one for the
//! duration of a query and releases it on every exit path, which is the
//! entire concurrency story of this service.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::time::Duration;

use jd_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// MySQL connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Create a connection pool from configuration
    pub async fn new(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .connect(&config.url)
            .await
            .map_err(|e| InfrastructureError::Database(format!("Failed to connect: {}", e)))?;

        tracing::info!(
            max_connections = config.max_connections,
            "database pool initialized"
        );

        Ok(Self { pool })
    }

    /// The underlying SQLx pool
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Verify the database is reachable
    pub async fn health_check(&self) -> Result<(), InfrastructureError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| InfrastructureError::Database(format!("Health check failed: {}", e)))
    }
}
