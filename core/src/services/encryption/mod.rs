//! Reversible password encryption.

mod password_cipher;

pub use password_cipher::PasswordCipher;
