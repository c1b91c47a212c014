//! Password-reset flow configuration.

/// Per-account-type knobs for the password-reset flow
#[derive(Debug, Clone)]
pub struct PasswordResetConfig {
    /// Reject inactive accounts before issuing a code or resetting a
    /// password (affiliates only; user accounts skip this check)
    pub require_active: bool,
}

impl Default for PasswordResetConfig {
    fn default() -> Self {
        Self {
            require_active: false,
        }
    }
}

impl PasswordResetConfig {
    /// Configuration used by the affiliate reset flow
    pub fn for_affiliates() -> Self {
        Self {
            require_active: true,
        }
    }
}
