//! User read/update/delete use-cases.

use std::sync::Arc;

use crate::domain::entities::user::{User, UserPatch};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::uow::{TransactionScope, UnitOfWork};

/// User management service
pub struct UserService<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserService<U> {
    /// Create a new user service
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Return the authenticated subject's own record.
    pub async fn me(&self, user_id: i64) -> DomainResult<User> {
        self.get_user(user_id).await
    }

    /// Return a user by id, or `UserNotFound`.
    pub async fn get_user(&self, user_id: i64) -> DomainResult<User> {
        let scope = self.uow.begin().await?;
        let user = scope
            .users()
            .get_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;
        scope.commit().await?;
        Ok(user)
    }

    /// Return a page of users in ascending-id order.
    ///
    /// Validating the pagination bounds (non-negative offset, positive
    /// bounded limit) is the caller's responsibility.
    pub async fn list_users(&self, offset: i64, limit: i64) -> DomainResult<Vec<User>> {
        let scope = self.uow.begin().await?;
        let users = scope.users().list_paginated(offset, limit).await?;
        scope.commit().await?;
        Ok(users)
    }

    /// Apply a partial update to a user.
    ///
    /// Unset patch fields are left untouched; an empty patch returns the
    /// record unchanged.
    pub async fn patch_user(&self, user_id: i64, patch: UserPatch) -> DomainResult<User> {
        let scope = self.uow.begin().await?;

        // Existence check first so an absent id is always UserNotFound
        scope
            .users()
            .get_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let user = scope
            .users()
            .update(user_id, patch)
            .await?
            .ok_or(DomainError::UserNotFound)?;
        scope.commit().await?;

        tracing::debug!(user_id, "user patched");
        Ok(user)
    }

    /// Delete a user by id. Idempotent: an absent id is not an error.
    pub async fn delete_user(&self, user_id: i64) -> DomainResult<()> {
        let scope = self.uow.begin().await?;
        scope.users().delete(user_id).await?;
        scope.commit().await?;

        tracing::info!(user_id, "user deleted");
        Ok(())
    }
}
