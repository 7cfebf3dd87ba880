//! MySQL implementation of the verification repository.

use async_trait::async_trait;
use gk_core::domain::entities::verification::Verification;
use gk_core::domain::value_objects::VerificationChannel;
use gk_core::errors::{DomainError, DomainResult};
use gk_core::repositories::VerificationRepository;
use sqlx::mysql::MySqlRow;
use tracing::debug;

use super::{column, storage_error, tx_mut, SharedTx};

pub struct MySqlVerificationRepository {
    tx: SharedTx,
}

impl MySqlVerificationRepository {
    pub(crate) fn new(tx: SharedTx) -> Self {
        Self { tx }
    }

    fn row_to_verification(row: &MySqlRow) -> DomainResult<Verification> {
        let channel: String = column(row, "channel")?;
        Ok(Verification {
            user_id: column(row, "user_id")?,
            code: column(row, "code")?,
            channel: VerificationChannel::parse(&channel).ok_or_else(|| {
                DomainError::Internal {
                    message: format!("unknown verification channel in storage: {channel}"),
                }
            })?,
            created_at: column(row, "created_at")?,
            expires_at: column(row, "expires_at")?,
            consumed_at: column(row, "consumed_at")?,
        })
    }
}

#[async_trait]
impl VerificationRepository for MySqlVerificationRepository {
    async fn add(&self, verification: Verification) -> DomainResult<Verification> {
        let mut guard = self.tx.lock().await;
        let tx = tx_mut(&mut guard)?;

        sqlx::query(
            "INSERT INTO verifications \
             (user_id, code, channel, created_at, expires_at, consumed_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(verification.user_id)
        .bind(&verification.code)
        .bind(verification.channel.as_str())
        .bind(verification.created_at)
        .bind(verification.expires_at)
        .bind(verification.consumed_at)
        .execute(&mut **tx)
        .await
        .map_err(storage_error)?;

        debug!(user_id = verification.user_id, "inserted verification row");
        Ok(verification)
    }

    async fn get_latest_for_user(&self, user_id: i64) -> DomainResult<Option<Verification>> {
        let mut guard = self.tx.lock().await;
        let tx = tx_mut(&mut guard)?;

        // `id DESC` breaks creation-time ties toward the newest insert
        let row = sqlx::query(
            "SELECT user_id, code, channel, created_at, expires_at, consumed_at \
             FROM verifications WHERE user_id = ? \
             ORDER BY created_at DESC, id DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(storage_error)?;

        row.as_ref().map(Self::row_to_verification).transpose()
    }

    async fn mark_consumed(&self, verification: &Verification) -> DomainResult<()> {
        let mut guard = self.tx.lock().await;
        let tx = tx_mut(&mut guard)?;

        // The `consumed_at IS NULL` guard keeps the first consumption
        // timestamp when the same code is marked twice.
        sqlx::query(
            "UPDATE verifications SET consumed_at = ? \
             WHERE user_id = ? AND code = ? AND consumed_at IS NULL",
        )
        .bind(verification.consumed_at)
        .bind(verification.user_id)
        .bind(&verification.code)
        .execute(&mut **tx)
        .await
        .map_err(storage_error)?;
        Ok(())
    }
}
