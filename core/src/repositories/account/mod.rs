//! Credential store capability interface and mock implementations.

mod mock;
mod store;

pub use mock::{MockAffiliateStore, MockUserStore};
pub use store::AccountStore;
