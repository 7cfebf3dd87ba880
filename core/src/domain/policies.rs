//! Authorization policies.
//!
//! Pure, side-effect-free decision functions over roles and identities.
//! Callers are responsible for enforcement: a `false` answer should be
//! turned into [`DomainError::AccessDenied`](crate::errors::DomainError)
//! at the boundary.

use crate::domain::value_objects::UserRole;

/// Business policy: only admins can list all users.
pub fn can_list_users(role: UserRole) -> bool {
    role == UserRole::Admin
}

/// Business policy: a user can read themselves; admins can read anyone.
pub fn can_read_user(subject_id: i64, target_id: i64, role: UserRole) -> bool {
    subject_id == target_id || role == UserRole::Admin
}

/// Business policy: only admins can modify other users' data.
pub fn can_modify_user(role: UserRole) -> bool {
    role == UserRole::Admin
}
