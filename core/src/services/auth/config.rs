//! Authentication service configuration

use gk_shared::config::VerificationConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Verification code lifetime in minutes
    pub verification_ttl_minutes: i64,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            verification_ttl_minutes: 10,
        }
    }
}

impl From<&VerificationConfig> for AuthServiceConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            verification_ttl_minutes: config.code_ttl_minutes,
        }
    }
}
