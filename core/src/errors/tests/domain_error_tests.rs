use gk_shared::ErrorResponse;

use crate::errors::{DomainError, TokenError};

#[test]
fn test_error_codes_are_stable() {
    assert_eq!(DomainError::EmailAlreadyTaken.code(), "email_already_taken");
    assert_eq!(DomainError::UserNotFound.code(), "user_not_found");
    assert_eq!(DomainError::UserNotVerified.code(), "user_not_verified");
    assert_eq!(DomainError::InvalidCredentials.code(), "invalid_credentials");
    assert_eq!(DomainError::VerificationCodeInvalid.code(), "verification_invalid");
    assert_eq!(DomainError::AccessDenied.code(), "access_denied");
    assert_eq!(DomainError::InvalidEmailAddress.code(), "invalid_email");
}

#[test]
fn test_status_mapping_table() {
    assert_eq!(DomainError::EmailAlreadyTaken.suggested_status(), 409);
    assert_eq!(DomainError::InvalidCredentials.suggested_status(), 401);
    assert_eq!(DomainError::UserNotVerified.suggested_status(), 403);
    assert_eq!(DomainError::UserNotFound.suggested_status(), 404);
    assert_eq!(DomainError::VerificationCodeInvalid.suggested_status(), 400);
    assert_eq!(DomainError::AccessDenied.suggested_status(), 403);
    assert_eq!(DomainError::InvalidEmailAddress.suggested_status(), 422);
    assert_eq!(
        DomainError::Token(TokenError::TokenExpired).suggested_status(),
        401
    );
    assert_eq!(
        DomainError::Internal { message: "boom".to_string() }.suggested_status(),
        500
    );
}

#[test]
fn test_token_error_bridges_transparently() {
    let err: DomainError = TokenError::TokenExpired.into();
    assert_eq!(err.to_string(), "Token expired");
    assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
}

#[test]
fn test_error_response_payload() {
    let response = ErrorResponse::from(&DomainError::VerificationCodeInvalid);
    assert_eq!(response.code, "verification_invalid");
    assert_eq!(response.message, "Invalid or expired verification code.");
}
