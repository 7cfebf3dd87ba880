//! Authentication configuration

use serde::{Deserialize, Serialize};

/// JWT token issuance configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token lifetime in minutes
    pub access_ttl_minutes: i64,

    /// Refresh token lifetime in days
    pub refresh_ttl_days: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("change-me-in-production"),
            access_ttl_minutes: 15,
            refresh_ttl_days: 7,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token lifetime in minutes
    pub fn with_access_ttl_minutes(mut self, minutes: i64) -> Self {
        self.access_ttl_minutes = minutes;
        self
    }

    /// Set refresh token lifetime in days
    pub fn with_refresh_ttl_days(mut self, days: i64) -> Self {
        self.refresh_ttl_days = days;
        self
    }

    /// Check if the default secret is still in place (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "change-me-in-production"
    }
}

/// Verification-code configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Verification code lifetime in minutes
    pub code_ttl_minutes: i64,

    /// Age in hours after which an unverified account may be purged
    /// by the external cleanup job. The core never deletes accounts
    /// itself; this value is read by the job's scheduler.
    pub stale_account_ttl_hours: i64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: 10,
            stale_account_ttl_hours: 48,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_defaults() {
        let config = JwtConfig::default();
        assert_eq!(config.access_ttl_minutes, 15);
        assert_eq!(config.refresh_ttl_days, 7);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builders() {
        let config = JwtConfig::new("s3cret")
            .with_access_ttl_minutes(5)
            .with_refresh_ttl_days(30);
        assert_eq!(config.secret, "s3cret");
        assert_eq!(config.access_ttl_minutes, 5);
        assert_eq!(config.refresh_ttl_days, 30);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_verification_config_defaults() {
        let config = VerificationConfig::default();
        assert_eq!(config.code_ttl_minutes, 10);
        assert_eq!(config.stale_account_ttl_hours, 48);
    }
}
