//! Bcrypt implementation of the password hashing port.

use bcrypt::DEFAULT_COST;
use gk_core::errors::{DomainError, DomainResult};
use gk_core::ports::PasswordHasher;

/// Password hasher backed by bcrypt.
///
/// Each hash embeds its own random salt, so `verify` needs no stored
/// salt and equal passwords produce distinct hashes.
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Use a non-default work factor. Tests lower it to keep hashing fast.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, raw: &str) -> DomainResult<String> {
        bcrypt::hash(raw, self.cost).map_err(|e| DomainError::Internal {
            message: format!("password hashing failed: {e}"),
        })
    }

    fn verify(&self, raw: &str, hashed: &str) -> bool {
        // A malformed stored hash is treated as a mismatch, not an error
        bcrypt::verify(raw, hashed).unwrap_or(false)
    }
}
