use gk_core::domain::entities::token::TokenType;
use gk_core::domain::value_objects::UserRole;
use gk_core::errors::{DomainError, TokenError};
use gk_core::ports::TokenProvider;
use gk_shared::config::JwtConfig;

use crate::security::JwtTokenProvider;

fn provider() -> JwtTokenProvider {
    JwtTokenProvider::new(&JwtConfig::new("test-secret-key"))
}

#[test]
fn test_access_token_round_trip_carries_role() {
    let provider = provider();
    let token = provider.issue_access("42", UserRole::Admin).unwrap();

    let claims = provider.decode(&token).unwrap();
    assert_eq!(claims.sub, "42");
    assert_eq!(claims.token_type, TokenType::Access);
    assert_eq!(claims.role.as_deref(), Some("ADMIN"));
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_refresh_token_round_trip_has_no_role() {
    let provider = provider();
    let token = provider.issue_refresh("42").unwrap();

    let claims = provider.decode(&token).unwrap();
    assert_eq!(claims.sub, "42");
    assert_eq!(claims.token_type, TokenType::Refresh);
    assert_eq!(claims.role, None);
}

#[test]
fn test_expired_token_is_rejected() {
    let config = JwtConfig::new("test-secret-key").with_access_ttl_minutes(-5);
    let provider = JwtTokenProvider::new(&config);
    let token = provider.issue_access("42", UserRole::User).unwrap();

    let err = provider.decode(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
}

#[test]
fn test_forged_signature_is_rejected() {
    let issuer = JwtTokenProvider::new(&JwtConfig::new("secret-a"));
    let verifier = JwtTokenProvider::new(&JwtConfig::new("secret-b"));
    let token = issuer.issue_access("42", UserRole::User).unwrap();

    let err = verifier.decode(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidSignature)));
}

#[test]
fn test_garbage_input_is_rejected_as_malformed() {
    let provider = provider();

    let err = provider.decode("not-a-jwt").unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidTokenFormat)
    ));
}
