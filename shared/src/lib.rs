//! Shared utilities and common types for the Gatekey identity services
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures consumed by the API boundary

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, JwtConfig, VerificationConfig};
pub use errors::ErrorResponse;
