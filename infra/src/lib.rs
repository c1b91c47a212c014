//! # Jobdesk Infrastructure
//!
//! Infrastructure layer for the Jobdesk backend: MySQL repository
//! implementations, the reCAPTCHA verification client, and the HTTP
//! email sender. Everything here implements a trait defined in
//! `jd_core`; nothing above this crate knows about SQLx or reqwest.

pub mod captcha;
pub mod database;
pub mod email;

use thiserror::Error;

/// Infrastructure-level errors raised while constructing or operating
/// external collaborators
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Email error: {0}")]
    Email(String),

    #[error("Captcha error: {0}")]
    Captcha(String),
}
