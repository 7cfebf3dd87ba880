use std::sync::Arc;

use async_trait::async_trait;
use gk_core::errors::{DomainError, DomainResult};
use gk_core::uow::{TransactionScope, UnitOfWork};
use sqlx::MySqlPool;
use tokio::sync::Mutex;

use super::{MySqlUserRepository, MySqlVerificationRepository, SharedTx};

/// Unit of work backed by a MySQL connection pool.
///
/// Each [`begin`](UnitOfWork::begin) opens a fresh database transaction and
/// hands back a scope whose repositories all execute inside it.
#[derive(Clone)]
pub struct MySqlUnitOfWork {
    pool: MySqlPool,
}

impl MySqlUnitOfWork {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitOfWork for MySqlUnitOfWork {
    type Scope = MySqlTransactionScope;

    async fn begin(&self) -> DomainResult<MySqlTransactionScope> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("failed to begin transaction: {e}"),
            })?;
        let tx: SharedTx = Arc::new(Mutex::new(Some(tx)));
        Ok(MySqlTransactionScope {
            users: MySqlUserRepository::new(Arc::clone(&tx)),
            verifications: MySqlVerificationRepository::new(Arc::clone(&tx)),
            tx,
        })
    }
}

/// One MySQL transaction plus the repositories bound to it.
///
/// Dropping the scope without calling [`commit`](TransactionScope::commit)
/// drops the underlying SQLx transaction, which rolls it back.
pub struct MySqlTransactionScope {
    users: MySqlUserRepository,
    verifications: MySqlVerificationRepository,
    tx: SharedTx,
}

impl MySqlTransactionScope {
    fn take_tx_error() -> DomainError {
        DomainError::Internal {
            message: "transaction already finished".to_string(),
        }
    }
}

#[async_trait]
impl TransactionScope for MySqlTransactionScope {
    type Users = MySqlUserRepository;
    type Verifications = MySqlVerificationRepository;

    fn users(&self) -> &Self::Users {
        &self.users
    }

    fn verifications(&self) -> &Self::Verifications {
        &self.verifications
    }

    async fn commit(self) -> DomainResult<()> {
        let tx = self
            .tx
            .lock()
            .await
            .take()
            .ok_or_else(Self::take_tx_error)?;
        tx.commit().await.map_err(|e| DomainError::Internal {
            message: format!("failed to commit transaction: {e}"),
        })
    }

    async fn rollback(self) -> DomainResult<()> {
        let tx = self
            .tx
            .lock()
            .await
            .take()
            .ok_or_else(Self::take_tx_error)?;
        tx.rollback().await.map_err(|e| DomainError::Internal {
            message: format!("failed to roll back transaction: {e}"),
        })
    }
}
