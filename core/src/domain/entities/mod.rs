//! Domain entities for accounts, roles, settings, and tokens.

pub mod account;
pub mod affiliate;
pub mod role;
pub mod setting;
pub mod token;
pub mod user;

pub use account::AccountRecord;
pub use affiliate::Affiliate;
pub use role::Role;
pub use setting::Setting;
pub use token::Claims;
pub use user::User;
