//! Authentication response value object.

use serde::{Deserialize, Serialize};

/// Result of a successful login: the signed bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed JWT embedding identity and role claims
    pub token: String,
}

impl AuthResponse {
    /// Creates a new authentication response
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}
