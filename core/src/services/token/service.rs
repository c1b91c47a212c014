//! Token service implementation.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use jd_shared::config::JwtConfig;

use crate::domain::entities::{AccountRecord, Claims};
use crate::errors::{DomainResult, TokenError};

/// Service issuing and validating signed bearer tokens
///
/// Tokens are HS256-signed with the configured process-wide secret.
/// There is no refresh mechanism and no revocation: a token is valid
/// until its expiry claim, and nothing is persisted server-side.
pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from JWT configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issue a token for an account with its resolved role name
    pub fn issue(&self, account: &impl AccountRecord, role: &str) -> DomainResult<String> {
        let claims = Claims::new(
            account.id(),
            account.username(),
            account.email(),
            role,
            self.config.token_expiry,
            &self.config.issuer,
            &self.config.audience,
        );

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed.into())
    }

    /// Decode and validate a token, returning its claims
    pub fn decode(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let err = match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::InvalidTokenFormat,
                };
                err.into()
            })
    }
}
