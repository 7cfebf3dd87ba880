//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User, UserPatch};
use crate::domain::value_objects::EmailAddress;
use crate::errors::DomainResult;

/// Repository contract for User entity persistence operations.
///
/// Implementations run inside the transaction owned by the enclosing
/// [`TransactionScope`](crate::uow::TransactionScope); all operations
/// issued through one scope share a single transaction.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their storage-assigned id.
    async fn get_by_id(&self, id: i64) -> DomainResult<Option<User>>;

    /// Find a user by their normalized email address.
    async fn get_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>>;

    /// Return a page of users ordered ascending by id.
    ///
    /// Pagination bounds are the caller's responsibility to validate.
    async fn list_paginated(&self, offset: i64, limit: i64) -> DomainResult<Vec<User>>;

    /// Persist a new user and return it with identity assigned.
    ///
    /// A storage-level uniqueness violation on email surfaces as
    /// [`DomainError::EmailAlreadyTaken`](crate::errors::DomainError);
    /// the constraint, not the service's pre-check, is the authoritative
    /// invariant under concurrent signups.
    async fn add(&self, user: NewUser) -> DomainResult<User>;

    /// Apply a partial update and return the updated row, or `None` if
    /// the user does not exist. Unset patch fields are left untouched.
    async fn update(&self, id: i64, patch: UserPatch) -> DomainResult<Option<User>>;

    /// Delete a user by id. Idempotent: deleting an absent id is not an
    /// error.
    async fn delete(&self, id: i64) -> DomainResult<()>;
}
