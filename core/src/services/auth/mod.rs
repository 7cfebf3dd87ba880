//! Authentication service module
//!
//! This module provides the transactional authentication use-cases:
//! - Account signup with verification-code issuance
//! - Email verification by one-time code
//! - Credential login and token-pair issuance
//! - Access-token refresh

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
