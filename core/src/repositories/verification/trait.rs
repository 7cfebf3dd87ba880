//! Verification repository trait.

use async_trait::async_trait;

use crate::domain::entities::verification::Verification;
use crate::errors::DomainResult;

/// Repository contract for verification artifacts.
///
/// A user accumulates verification records over time; verification
/// logic only ever operates on the latest one.
#[async_trait]
pub trait VerificationRepository: Send + Sync {
    /// Persist a new verification record and return it.
    async fn add(&self, verification: Verification) -> DomainResult<Verification>;

    /// Return the most recently created verification for a user, or
    /// `None`. Ties on creation time are broken toward the most recently
    /// inserted record.
    async fn get_latest_for_user(&self, user_id: i64) -> DomainResult<Option<Verification>>;

    /// Persist the consumption timestamp of a verification, matched by
    /// `(user_id, code)`. Idempotent: a record that is already consumed
    /// keeps its original timestamp.
    async fn mark_consumed(&self, verification: &Verification) -> DomainResult<()>;
}
