//! Setting repository trait.

use async_trait::async_trait;

use crate::domain::entities::Setting;
use crate::errors::DomainResult;

/// Read access to the settings table
///
/// Values are fetched by name on every request; nothing is cached.
#[async_trait]
pub trait SettingRepository: Send + Sync {
    /// Find a setting by its name
    async fn get_by_name(&self, name: &str) -> DomainResult<Option<Setting>>;
}
