//! MySQL implementations of the core repository traits.

mod affiliate_repository;
mod role_repository;
mod setting_repository;
mod user_repository;

pub use affiliate_repository::MySqlAffiliateRepository;
pub use role_repository::MySqlRoleRepository;
pub use setting_repository::MySqlSettingRepository;
pub use user_repository::MySqlUserRepository;
