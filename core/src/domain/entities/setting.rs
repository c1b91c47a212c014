//! Setting entity: the name/value configuration table.

use serde::{Deserialize, Serialize};

/// A named configuration value stored in the database
///
/// Settings are fetched by name at request time, never cached; the
/// captcha secret and the forgot-password email template live here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    /// Setting name
    pub name: String,

    /// Setting value
    pub value: String,
}

impl Setting {
    /// Creates a new Setting instance
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
