//! User entity representing a registered account in the Gatekey system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{EmailAddress, UserRole};

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Storage-assigned identifier
    pub id: i64,

    /// Email address (globally unique, case-insensitive)
    pub email: EmailAddress,

    /// Password hash; the raw secret never reaches this entity
    pub password: String,

    /// Optional first name
    pub first_name: Option<String>,

    /// Optional last name
    pub last_name: Option<String>,

    /// Whether the account has completed email verification
    pub is_verified: bool,

    /// Role of the account
    pub role: UserRole,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Marks the user as verified
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.updated_at = Utc::now();
    }

    /// Promotes the user to the admin role
    pub fn promote_to_admin(&mut self) {
        self.role = UserRole::Admin;
        self.updated_at = Utc::now();
    }

    /// Demotes the user to the regular role
    pub fn demote_to_user(&mut self) {
        self.role = UserRole::User;
        self.updated_at = Utc::now();
    }

    /// Checks if the user holds the admin role
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Insert payload for a new user; identity and timestamps are assigned
/// by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: EmailAddress,
    /// Already-hashed password
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: UserRole,
}

/// Partial update payload. `None` fields are left untouched, giving
/// patch rather than replace semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<UserRole>,
    pub is_verified: Option<bool>,
}

impl UserPatch {
    /// Returns true if no field is set
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.role.is_none()
            && self.is_verified.is_none()
    }
}
