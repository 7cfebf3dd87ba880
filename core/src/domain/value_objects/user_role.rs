//! User role value object.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role assigned to a user account.
///
/// Roles carry no ordering; authorization policies compare them by
/// equality only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Regular account holder
    User,
    /// Administrative account
    Admin,
}

impl UserRole {
    /// Stable string form used in storage and token claims
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
        }
    }

    /// Parse the stable string form back into a role
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "USER" => Some(UserRole::User),
            "ADMIN" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
