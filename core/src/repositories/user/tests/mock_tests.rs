//! Unit tests for the in-memory user repository

use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::user::{MockUserRepository, UserRepository};

fn user(email: &str) -> User {
    User::new(email.to_string(), None, "hash".to_string())
}

#[tokio::test]
async fn test_create_and_find_user() {
    let repo = MockUserRepository::new();
    let created = repo.create(user("anna@example.com")).await.unwrap();

    let by_email = repo.find_by_email("anna@example.com").await.unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(created.id));

    let by_id = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(by_id.map(|u| u.email), Some("anna@example.com".to_string()));

    assert!(repo.exists_by_email("anna@example.com").await.unwrap());
    assert!(!repo.exists_by_email("other@example.com").await.unwrap());
}

#[tokio::test]
async fn test_duplicate_email_is_a_validation_error() {
    let repo = MockUserRepository::new();
    repo.create(user("anna@example.com")).await.unwrap();

    let err = repo.create(user("anna@example.com")).await.unwrap_err();
    match err {
        DomainError::Validation(errors) => {
            assert_eq!(errors.get("email"), ["user with this email already exists."]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_update_user() {
    let repo = MockUserRepository::new();
    let mut stored = repo.create(user("anna@example.com")).await.unwrap();

    stored.update_last_login();
    repo.update(stored.clone()).await.unwrap();

    let found = repo.find_by_id(stored.id).await.unwrap().unwrap();
    assert!(found.last_login.is_some());
}

#[tokio::test]
async fn test_update_missing_user() {
    let repo = MockUserRepository::new();
    let result = repo.update(user("ghost@example.com")).await;

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}
