//! Database module - MySQL implementations using SQLx

pub mod mysql;

pub use mysql::{
    MySqlTransactionScope, MySqlUnitOfWork, MySqlUserRepository, MySqlVerificationRepository,
};

use std::time::Duration;

use gk_core::errors::{DomainError, DomainResult};
use gk_shared::config::DatabaseConfig;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

/// Build a MySQL connection pool from configuration
pub async fn connect_pool(config: &DatabaseConfig) -> DomainResult<MySqlPool> {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("failed to connect to database: {e}"),
        })
}
