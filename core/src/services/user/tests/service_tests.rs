use std::sync::Arc;

use crate::domain::entities::user::{NewUser, User, UserPatch};
use crate::domain::value_objects::{EmailAddress, UserRole};
use crate::errors::DomainError;
use crate::repositories::UserRepository;
use crate::services::user::UserService;
use crate::uow::{InMemoryUnitOfWork, TransactionScope, UnitOfWork};

fn user_service(uow: &InMemoryUnitOfWork) -> UserService<InMemoryUnitOfWork> {
    UserService::new(Arc::new(uow.clone()))
}

async fn seed_user(uow: &InMemoryUnitOfWork, email: &str) -> User {
    let scope = uow.begin().await.unwrap();
    let user = scope
        .users()
        .add(NewUser {
            email: EmailAddress::parse(email).unwrap(),
            password: "hashed".to_string(),
            first_name: Some("Alice".to_string()),
            last_name: Some("Smith".to_string()),
            role: UserRole::User,
        })
        .await
        .unwrap();
    scope.commit().await.unwrap();
    user
}

#[tokio::test]
async fn test_me_returns_own_record() {
    let uow = InMemoryUnitOfWork::new();
    let seeded = seed_user(&uow, "alice@example.com").await;
    let service = user_service(&uow);

    let user = service.me(seeded.id).await.unwrap();
    assert_eq!(user.id, seeded.id);
    assert_eq!(user.email.as_str(), "alice@example.com");
}

#[tokio::test]
async fn test_get_user_not_found() {
    let uow = InMemoryUnitOfWork::new();
    let service = user_service(&uow);

    let err = service.get_user(404).await.unwrap_err();
    assert!(matches!(err, DomainError::UserNotFound));
}

#[tokio::test]
async fn test_list_users_pages_in_ascending_id_order() {
    let uow = InMemoryUnitOfWork::new();
    for i in 0..5 {
        seed_user(&uow, &format!("user{i}@example.com")).await;
    }
    let service = user_service(&uow);

    let page = service.list_users(2, 2).await.unwrap();
    let ids: Vec<i64> = page.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![3, 4]);

    let tail = service.list_users(4, 10).await.unwrap();
    assert_eq!(tail.len(), 1);
}

#[tokio::test]
async fn test_patch_user_applies_only_provided_fields() {
    let uow = InMemoryUnitOfWork::new();
    let seeded = seed_user(&uow, "alice@example.com").await;
    let service = user_service(&uow);

    let patch = UserPatch {
        first_name: Some("Alicia".to_string()),
        ..Default::default()
    };
    let updated = service.patch_user(seeded.id, patch).await.unwrap();
    assert_eq!(updated.first_name.as_deref(), Some("Alicia"));
    assert_eq!(updated.last_name.as_deref(), Some("Smith"));
    assert_eq!(updated.role, UserRole::User);
}

#[tokio::test]
async fn test_patch_user_with_empty_patch_changes_nothing() {
    let uow = InMemoryUnitOfWork::new();
    let seeded = seed_user(&uow, "alice@example.com").await;
    let service = user_service(&uow);

    let unchanged = service
        .patch_user(seeded.id, UserPatch::default())
        .await
        .unwrap();
    assert_eq!(unchanged, seeded);
}

#[tokio::test]
async fn test_patch_user_not_found() {
    let uow = InMemoryUnitOfWork::new();
    let service = user_service(&uow);

    let err = service
        .patch_user(404, UserPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::UserNotFound));
}

#[tokio::test]
async fn test_delete_user_is_idempotent() {
    let uow = InMemoryUnitOfWork::new();
    let seeded = seed_user(&uow, "alice@example.com").await;
    let service = user_service(&uow);

    service.delete_user(seeded.id).await.unwrap();
    // Second delete of the same id succeeds with no error
    service.delete_user(seeded.id).await.unwrap();

    let err = service.get_user(seeded.id).await.unwrap_err();
    assert!(matches!(err, DomainError::UserNotFound));
}
