//! Setting repository trait and mock implementation.

mod mock;
mod repository;

pub use mock::MockSettingRepository;
pub use repository::SettingRepository;
