//! Domain-specific error types and error handling.
//!
//! All use-case failures are raised as typed [`DomainError`] values from
//! inside a unit-of-work scope (which rolls back) and propagate unchanged
//! to the API boundary, which maps them to protocol responses using
//! [`DomainError::code`] and [`DomainError::suggested_status`].

mod types;

#[cfg(test)]
mod tests;

use gk_shared::ErrorResponse;
use thiserror::Error;

pub use types::TokenError;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Email uniqueness violated at signup
    #[error("Email is already in use.")]
    EmailAlreadyTaken,

    /// Lookup by id or email failed
    #[error("User not found.")]
    UserNotFound,

    /// Login blocked pending verification
    #[error("User must be verified before performing this action.")]
    UserNotVerified,

    /// Bad email/password pair. Deliberately indistinguishable from
    /// "email not found".
    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// Missing, mismatched, expired, or already-consumed code.
    /// Deliberately indistinguishable among the four causes.
    #[error("Invalid or expired verification code.")]
    VerificationCodeInvalid,

    /// Authorization policy failed
    #[error("You do not have permission to perform this action.")]
    AccessDenied,

    /// Email value-object construction failed
    #[error("The provided email address is not valid.")]
    InvalidEmailAddress,

    /// Bridge to token-specific errors
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Unexpected lower-level fault (storage adapter, etc.)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Convenience alias used across the core and infrastructure crates
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Stable error code surfaced to API clients
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::EmailAlreadyTaken => "email_already_taken",
            DomainError::UserNotFound => "user_not_found",
            DomainError::UserNotVerified => "user_not_verified",
            DomainError::InvalidCredentials => "invalid_credentials",
            DomainError::VerificationCodeInvalid => "verification_invalid",
            DomainError::AccessDenied => "access_denied",
            DomainError::InvalidEmailAddress => "invalid_email",
            DomainError::Token(_) => "token_invalid",
            DomainError::Internal { .. } => "internal_error",
        }
    }

    /// HTTP status the boundary is expected to respond with
    pub fn suggested_status(&self) -> u16 {
        match self {
            DomainError::EmailAlreadyTaken => 409,
            DomainError::InvalidCredentials => 401,
            DomainError::UserNotVerified => 403,
            DomainError::UserNotFound => 404,
            DomainError::VerificationCodeInvalid => 400,
            DomainError::AccessDenied => 403,
            DomainError::InvalidEmailAddress => 422,
            DomainError::Token(_) => 401,
            DomainError::Internal { .. } => 500,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        ErrorResponse::new(err.code(), err.to_string())
    }
}
