//! Role entity referenced by user accounts.

use serde::{Deserialize, Serialize};

/// A named role, referenced from `User::role_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Unique identifier for the role
    pub id: i64,

    /// Role name embedded into issued tokens (e.g. "Admin", "Recruiter")
    pub name: String,
}

impl Role {
    /// Creates a new Role instance
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
