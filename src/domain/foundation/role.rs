//! User role classification.

use serde::{Deserialize, Serialize};

/// Account role stored on the user row.
///
/// Administrative accounts exist only for moderation; no profile-facing
/// operation may surface one as the queried subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Admin,
}

impl Role {
    /// Parses the role column value, defaulting unknown values to `Member`.
    pub fn from_db_str(value: &str) -> Self {
        match value {
            "admin" => Role::Admin,
            _ => Role::Member,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Admin => "admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}
