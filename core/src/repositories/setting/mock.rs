//! In-memory mock implementation of `SettingRepository` for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Setting;
use crate::errors::{DomainError, DomainResult};

use super::repository::SettingRepository;

/// Mock setting repository backed by a map
///
/// `failing()` builds a repository whose lookups error, for exercising
/// the fail-closed paths that depend on a broken settings store.
pub struct MockSettingRepository {
    settings: Arc<RwLock<HashMap<String, String>>>,
    fail: bool,
}

impl MockSettingRepository {
    /// Create an empty mock repository
    pub fn new() -> Self {
        Self {
            settings: Arc::new(RwLock::new(HashMap::new())),
            fail: false,
        }
    }

    /// Create a repository whose every lookup fails
    pub fn failing() -> Self {
        Self {
            settings: Arc::new(RwLock::new(HashMap::new())),
            fail: true,
        }
    }

    /// Seed a setting, returning self for chaining
    pub fn with_setting(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings
            .try_write()
            .expect("unshared lock")
            .insert(name.into(), value.into());
        self
    }
}

impl Default for MockSettingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingRepository for MockSettingRepository {
    async fn get_by_name(&self, name: &str) -> DomainResult<Option<Setting>> {
        if self.fail {
            return Err(DomainError::Database {
                message: "settings store unavailable".to_string(),
            });
        }
        let settings = self.settings.read().await;
        Ok(settings
            .get(name)
            .map(|value| Setting::new(name, value.clone())))
    }
}
