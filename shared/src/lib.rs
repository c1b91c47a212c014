//! Shared utilities and common types for the Jobdesk server
//!
//! This crate provides functionality used across all server modules:
//! typed configuration loaded from the environment, the standard API
//! response envelope, and input validation helpers.

pub mod config;
pub mod types;
pub mod utils;

pub use config::AppConfig;
pub use types::response::ApiResponse;
