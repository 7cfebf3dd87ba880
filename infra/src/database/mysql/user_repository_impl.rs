//! MySQL implementation of the user repository.

use async_trait::async_trait;
use chrono::Utc;
use gk_core::domain::entities::user::{NewUser, User, UserPatch};
use gk_core::domain::value_objects::{EmailAddress, UserRole};
use gk_core::errors::{DomainError, DomainResult};
use gk_core::repositories::UserRepository;
use sqlx::mysql::MySqlRow;
use sqlx::QueryBuilder;
use tracing::debug;

use super::{column, storage_error, tx_mut, SharedTx};

const USER_COLUMNS: &str =
    "id, email, password, first_name, last_name, is_verified, role, created_at, updated_at";

pub struct MySqlUserRepository {
    tx: SharedTx,
}

impl MySqlUserRepository {
    pub(crate) fn new(tx: SharedTx) -> Self {
        Self { tx }
    }

    fn row_to_user(row: &MySqlRow) -> DomainResult<User> {
        let email: String = column(row, "email")?;
        let role: String = column(row, "role")?;
        Ok(User {
            id: column(row, "id")?,
            email: EmailAddress::parse(&email)?,
            password: column(row, "password")?,
            first_name: column(row, "first_name")?,
            last_name: column(row, "last_name")?,
            is_verified: column(row, "is_verified")?,
            role: UserRole::parse(&role).ok_or_else(|| DomainError::Internal {
                message: format!("unknown role in storage: {role}"),
            })?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn get_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        let mut guard = self.tx.lock().await;
        let tx = tx_mut(&mut guard)?;

        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(storage_error)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn get_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        let mut guard = self.tx.lock().await;
        let tx = tx_mut(&mut guard)?;

        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?"))
            .bind(email.as_str())
            .fetch_optional(&mut **tx)
            .await
            .map_err(storage_error)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn list_paginated(&self, offset: i64, limit: i64) -> DomainResult<Vec<User>> {
        let mut guard = self.tx.lock().await;
        let tx = tx_mut(&mut guard)?;

        let rows = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id ASC LIMIT ? OFFSET ?"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut **tx)
        .await
        .map_err(storage_error)?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn add(&self, user: NewUser) -> DomainResult<User> {
        let mut guard = self.tx.lock().await;
        let tx = tx_mut(&mut guard)?;

        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO users \
             (email, password, first_name, last_name, is_verified, role, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(user.email.as_str())
        .bind(&user.password)
        .bind(user.first_name.as_deref())
        .bind(user.last_name.as_deref())
        .bind(false)
        .bind(user.role.as_str())
        .bind(now)
        .bind(now)
        .execute(&mut **tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db)
                if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
            {
                DomainError::EmailAlreadyTaken
            }
            _ => storage_error(e),
        })?;

        let id = result.last_insert_id() as i64;
        debug!(user_id = id, "inserted user row");

        Ok(User {
            id,
            email: user.email,
            password: user.password,
            first_name: user.first_name,
            last_name: user.last_name,
            is_verified: false,
            role: user.role,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update(&self, id: i64, patch: UserPatch) -> DomainResult<Option<User>> {
        if patch.is_empty() {
            return self.get_by_id(id).await;
        }

        {
            let mut guard = self.tx.lock().await;
            let tx = tx_mut(&mut guard)?;

            let mut query = QueryBuilder::<sqlx::MySql>::new("UPDATE users SET updated_at = ");
            query.push_bind(Utc::now());
            if let Some(first_name) = &patch.first_name {
                query.push(", first_name = ").push_bind(first_name);
            }
            if let Some(last_name) = &patch.last_name {
                query.push(", last_name = ").push_bind(last_name);
            }
            if let Some(role) = patch.role {
                query.push(", role = ").push_bind(role.as_str());
            }
            if let Some(is_verified) = patch.is_verified {
                query.push(", is_verified = ").push_bind(is_verified);
            }
            query.push(" WHERE id = ").push_bind(id);

            let result = query
                .build()
                .execute(&mut **tx)
                .await
                .map_err(storage_error)?;
            if result.rows_affected() == 0 {
                return Ok(None);
            }
        }

        self.get_by_id(id).await
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let mut guard = self.tx.lock().await;
        let tx = tx_mut(&mut guard)?;

        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut **tx)
            .await
            .map_err(storage_error)?;
        Ok(())
    }
}
