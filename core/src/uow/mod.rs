//! Unit of work: the transaction boundary for use-case services.
//!
//! A [`UnitOfWork`] opens a [`TransactionScope`] binding both
//! repositories to one transaction. The scope commits only when
//! [`TransactionScope::commit`] is called; dropping a scope on any other
//! exit path (including `?` propagation) rolls the transaction back and
//! releases the underlying resource. There is never partial-commit
//! visibility between a user write and a verification write performed in
//! the same scope.

pub mod memory;

#[cfg(test)]
mod tests;

use async_trait::async_trait;

use crate::errors::DomainResult;
use crate::repositories::{UserRepository, VerificationRepository};

pub use memory::InMemoryUnitOfWork;

/// Factory for transaction scopes.
///
/// Services hold one `UnitOfWork` and call [`begin`](Self::begin) once
/// per use-case invocation. Concurrent invocations get independent
/// scopes and therefore independent transactions; cross-transaction
/// ordering is delegated to the storage engine's isolation level.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    type Scope: TransactionScope;

    /// Allocate a transactional context with bound repositories.
    async fn begin(&self) -> DomainResult<Self::Scope>;
}

/// One open transaction with its bound repositories.
///
/// Adapters guarantee rollback and resource release when the scope is
/// dropped without a commit.
#[async_trait]
pub trait TransactionScope: Send {
    type Users: UserRepository;
    type Verifications: VerificationRepository;

    /// User repository bound to this transaction
    fn users(&self) -> &Self::Users;

    /// Verification repository bound to this transaction
    fn verifications(&self) -> &Self::Verifications;

    /// Commit the transaction.
    async fn commit(self) -> DomainResult<()>;

    /// Roll the transaction back explicitly. Rarely needed: dropping the
    /// scope has the same effect.
    async fn rollback(self) -> DomainResult<()>;
}
