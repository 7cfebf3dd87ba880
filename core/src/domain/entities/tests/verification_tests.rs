use chrono::{Duration, Utc};

use crate::domain::entities::verification::{Verification, CODE_LENGTH};
use crate::domain::value_objects::VerificationChannel;

#[test]
fn test_new_verification_ttl_window() {
    let now = Utc::now();
    let verification = Verification::new(7, "abc123".to_string(), VerificationChannel::Email, 10, now);

    assert_eq!(verification.user_id, 7);
    assert_eq!(verification.created_at, now);
    assert_eq!(verification.expires_at, now + Duration::minutes(10));
    assert!(verification.expires_at > verification.created_at);
    assert!(verification.consumed_at.is_none());
}

#[test]
fn test_expiry_boundary() {
    let now = Utc::now();
    let verification = Verification::new(1, "abc123".to_string(), VerificationChannel::Email, 10, now);

    assert!(!verification.is_expired(now));
    assert!(!verification.is_expired(now + Duration::minutes(9)));
    // Expiry is inclusive at the boundary
    assert!(verification.is_expired(now + Duration::minutes(10)));
    assert!(verification.is_expired(now + Duration::minutes(11)));
}

#[test]
fn test_consume_is_irreversible() {
    let now = Utc::now();
    let mut verification = Verification::new(1, "abc123".to_string(), VerificationChannel::Email, 10, now);

    assert!(!verification.is_consumed());
    let first = now + Duration::minutes(1);
    verification.consume(first);
    assert!(verification.is_consumed());
    assert_eq!(verification.consumed_at, Some(first));

    // A second consume attempt does not move the timestamp
    verification.consume(now + Duration::minutes(5));
    assert_eq!(verification.consumed_at, Some(first));
}

#[test]
fn test_generated_code_shape() {
    let code = Verification::generate_code();
    assert_eq!(code.len(), CODE_LENGTH);
    assert!(code.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_generated_codes_vary() {
    let codes: Vec<String> = (0..8).map(|_| Verification::generate_code()).collect();
    let first = &codes[0];
    assert!(codes.iter().any(|c| c != first));
}
