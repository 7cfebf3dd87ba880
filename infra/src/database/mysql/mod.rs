//! MySQL adapters for the core repository and unit-of-work traits.
//!
//! All repositories created by one [`MySqlUnitOfWork::begin`] call share a
//! single SQLx transaction through [`SharedTx`], so every statement they
//! issue commits or rolls back together.

mod uow;
mod user_repository_impl;
mod verification_repository_impl;

pub use uow::{MySqlTransactionScope, MySqlUnitOfWork};
pub use user_repository_impl::MySqlUserRepository;
pub use verification_repository_impl::MySqlVerificationRepository;

use std::sync::Arc;

use gk_core::errors::{DomainError, DomainResult};
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, Row, Transaction};
use tokio::sync::Mutex;

/// Transaction handle shared between the scope and its repositories.
///
/// The slot becomes `None` once the scope has committed or rolled back;
/// a repository call after that point reports an internal error instead
/// of touching a dead transaction.
pub(crate) type SharedTx = Arc<Mutex<Option<Transaction<'static, MySql>>>>;

/// Borrow the live transaction out of the shared slot
pub(crate) fn tx_mut<'a>(
    slot: &'a mut Option<Transaction<'static, MySql>>,
) -> DomainResult<&'a mut Transaction<'static, MySql>> {
    slot.as_mut().ok_or_else(|| DomainError::Internal {
        message: "transaction already finished".to_string(),
    })
}

/// Map an SQLx error to the domain error taxonomy
pub(crate) fn storage_error(err: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("database error: {err}"),
    }
}

/// Decode a single column, naming it in the error on failure
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> DomainResult<T>
where
    T: sqlx::Decode<'r, MySql> + sqlx::Type<MySql>,
{
    row.try_get(name).map_err(|e| DomainError::Internal {
        message: format!("failed to read column `{name}`: {e}"),
    })
}
