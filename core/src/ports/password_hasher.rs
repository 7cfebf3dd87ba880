//! Password hashing port.

use crate::errors::DomainResult;

/// Port for password hashing.
///
/// Hashing is CPU-bound and synchronous; callers that care about
/// scheduling can wrap calls in a blocking task.
pub trait PasswordHasher: Send + Sync {
    /// Return a secure, opaque hash for the provided raw password.
    fn hash(&self, raw: &str) -> DomainResult<String>;

    /// Return true if the raw password matches the given hash.
    ///
    /// A well-formed mismatch is a plain `false`, never an error.
    fn verify(&self, raw: &str, hashed: &str) -> bool;
}
