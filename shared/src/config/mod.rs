//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token issuance and verification-code configuration
//! - `database` - Database connection and pool configuration

pub mod auth;
pub mod database;

// Re-export commonly used types
pub use auth::{JwtConfig, VerificationConfig};
pub use database::DatabaseConfig;
