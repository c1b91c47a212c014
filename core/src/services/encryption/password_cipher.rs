//! Stored-password cipher using AES-256-GCM.
//!
//! Passwords are stored reversibly encrypted, not hashed: login decrypts
//! the stored value and compares plaintexts, and password reset encrypts
//! the new value before it is written. The payload format is
//! base64(nonce || ciphertext) with a random 12-byte nonce per encryption.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rand::{rngs::OsRng, RngCore};

use jd_shared::config::EncryptionConfig;

use crate::errors::{DomainError, DomainResult};

const NONCE_LEN: usize = 12;

/// Symmetric cipher over the configured process-wide key
pub struct PasswordCipher {
    cipher: Aes256Gcm,
}

impl PasswordCipher {
    /// Create a cipher from configuration (base64-encoded 32-byte key)
    pub fn new(config: &EncryptionConfig) -> DomainResult<Self> {
        let key_bytes = BASE64.decode(&config.key).map_err(|e| DomainError::Internal {
            message: format!("Encryption key is not valid base64: {}", e),
        })?;
        Self::from_key_bytes(&key_bytes)
    }

    /// Create a cipher from raw key bytes
    pub fn from_key_bytes(key: &[u8]) -> DomainResult<Self> {
        if key.len() != 32 {
            return Err(DomainError::Internal {
                message: "Invalid key size for AES-256".to_string(),
            });
        }

        let key = Key::<Aes256Gcm>::from_slice(key);
        Ok(Self {
            cipher: Aes256Gcm::new(key),
        })
    }

    /// Encrypt a plaintext password for storage
    pub fn encrypt(&self, plaintext: &str) -> DomainResult<String> {
        let mut nonce_bytes = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|e| DomainError::Internal {
                message: format!("Encryption failed: {}", e),
            })?;

        let mut payload = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        payload.extend_from_slice(&nonce_bytes);
        payload.extend_from_slice(&ciphertext);

        Ok(BASE64.encode(payload))
    }

    /// Decrypt a stored password back to its plaintext
    pub fn decrypt(&self, stored: &str) -> DomainResult<String> {
        let payload = BASE64.decode(stored).map_err(|e| DomainError::Internal {
            message: format!("Stored password is not valid base64: {}", e),
        })?;

        if payload.len() <= NONCE_LEN {
            return Err(DomainError::Internal {
                message: "Stored password payload is truncated".to_string(),
            });
        }

        let (nonce_bytes, ciphertext) = payload.split_at(NONCE_LEN);
        let nonce = Nonce::from_slice(nonce_bytes);

        let plaintext = self
            .cipher
            .decrypt(nonce, ciphertext)
            .map_err(|e| DomainError::Internal {
                message: format!("Decryption failed: {}", e),
            })?;

        String::from_utf8(plaintext).map_err(|e| DomainError::Internal {
            message: format!("Decrypted password is not valid UTF-8: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cipher() -> PasswordCipher {
        PasswordCipher::from_key_bytes(&[7u8; 32]).unwrap()
    }

    #[test]
    fn test_round_trip() {
        let cipher = test_cipher();
        let stored = cipher.encrypt("s3cret!").unwrap();

        assert_ne!(stored, "s3cret!");
        assert_eq!(cipher.decrypt(&stored).unwrap(), "s3cret!");
    }

    #[test]
    fn test_nonce_varies_per_encryption() {
        let cipher = test_cipher();
        let a = cipher.encrypt("same").unwrap();
        let b = cipher.encrypt("same").unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_decrypt_rejects_tampered_payload() {
        let cipher = test_cipher();
        let stored = cipher.encrypt("s3cret!").unwrap();

        let mut bytes = BASE64.decode(&stored).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xff;
        let tampered = BASE64.encode(bytes);

        assert!(cipher.decrypt(&tampered).is_err());
    }

    #[test]
    fn test_decrypt_rejects_wrong_key() {
        let stored = test_cipher().encrypt("s3cret!").unwrap();
        let other = PasswordCipher::from_key_bytes(&[8u8; 32]).unwrap();

        assert!(other.decrypt(&stored).is_err());
    }

    #[test]
    fn test_decrypt_rejects_garbage() {
        let cipher = test_cipher();

        assert!(cipher.decrypt("not-base64!!!").is_err());
        assert!(cipher.decrypt("c2hvcnQ=").is_err());
    }

    #[test]
    fn test_rejects_bad_key_size() {
        assert!(PasswordCipher::from_key_bytes(&[0u8; 16]).is_err());
    }
}
