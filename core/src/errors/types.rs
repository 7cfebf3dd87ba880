//! Token-specific error types.

use thiserror::Error;

/// Token-related errors raised by the token provider port.
///
/// The boundary layer maps every variant to an unauthenticated response;
/// the split exists for logging and for tests, not for clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
