//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims structure for the JWT payload
///
/// Tokens are stateless: nothing is persisted server-side and there is
/// no revocation list. Validity is bounded entirely by `exp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,

    /// Login username
    pub username: String,

    /// Email address
    pub email: String,

    /// Role name resolved at login time
    pub role: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for an account with a resolved role
    pub fn new(
        account_id: i64,
        username: &str,
        email: &str,
        role: &str,
        expiry_secs: i64,
        issuer: &str,
        audience: &str,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_secs);

        Self {
            sub: account_id.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the account ID from the claims
    pub fn account_id(&self) -> Result<i64, std::num::ParseIntError> {
        self.sub.parse()
    }
}
