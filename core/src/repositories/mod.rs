//! Repository traits defining the persistence interfaces, with in-memory
//! mock implementations for tests and local development.

pub mod account;
pub mod role;
pub mod setting;

pub use account::{AccountStore, MockAffiliateStore, MockUserStore};
pub use role::{MockRoleRepository, RoleRepository};
pub use setting::{MockSettingRepository, SettingRepository};
