use chrono::Utc;

use crate::domain::entities::user::{User, UserPatch};
use crate::domain::value_objects::{EmailAddress, UserRole};

fn sample_user() -> User {
    let now = Utc::now();
    User {
        id: 1,
        email: EmailAddress::parse("alice@example.com").unwrap(),
        password: "hashed-password".to_string(),
        first_name: Some("Alice".to_string()),
        last_name: None,
        is_verified: false,
        role: UserRole::User,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_verify_sets_flag_and_touches_updated_at() {
    let mut user = sample_user();
    let before = user.updated_at;

    assert!(!user.is_verified);
    user.verify();
    assert!(user.is_verified);
    assert!(user.updated_at >= before);
}

#[test]
fn test_role_promotion_and_demotion() {
    let mut user = sample_user();

    assert!(!user.is_admin());
    user.promote_to_admin();
    assert_eq!(user.role, UserRole::Admin);
    assert!(user.is_admin());

    user.demote_to_user();
    assert_eq!(user.role, UserRole::User);
    assert!(!user.is_admin());
}

#[test]
fn test_patch_is_empty() {
    assert!(UserPatch::default().is_empty());

    let patch = UserPatch {
        first_name: Some("Bob".to_string()),
        ..Default::default()
    };
    assert!(!patch.is_empty());

    let patch = UserPatch {
        is_verified: Some(true),
        ..Default::default()
    };
    assert!(!patch.is_empty());
}
