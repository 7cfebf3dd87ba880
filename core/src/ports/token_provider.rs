//! Token issuance port.

use crate::domain::entities::token::Claims;
use crate::domain::value_objects::UserRole;
use crate::errors::DomainResult;

/// Port for issuing and decoding bearer tokens (e.g. JWT).
///
/// Issued tokens embed the subject, a `type` discriminator
/// (`access` | `refresh`), an issued-at timestamp, and an expiry derived
/// from the configured TTLs. Only access tokens carry the role claim.
pub trait TokenProvider: Send + Sync {
    /// Issue an access token for the given subject and role.
    fn issue_access(&self, subject: &str, role: UserRole) -> DomainResult<String>;

    /// Issue a refresh token for the given subject.
    fn issue_refresh(&self, subject: &str) -> DomainResult<String>;

    /// Decode a token and return its claims.
    ///
    /// Fails with a [`TokenError`](crate::errors::TokenError) on expired,
    /// malformed, or forged input. Rejecting a refresh-typed token where
    /// an access token is expected (and vice versa) is the boundary
    /// layer's responsibility.
    fn decode(&self, token: &str) -> DomainResult<Claims>;
}
