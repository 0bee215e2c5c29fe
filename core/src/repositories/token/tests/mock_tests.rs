//! Unit tests for the in-memory token repository

use chrono::Duration;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::repositories::token::{MockTokenRepository, TokenRepository};

fn token(user_id: Uuid, hash: &str, lifetime: Duration) -> RefreshToken {
    RefreshToken::new(user_id, hash.to_string(), lifetime)
}

#[tokio::test]
async fn test_save_and_find_by_hash() {
    let repo = MockTokenRepository::new();
    let user_id = Uuid::new_v4();
    let saved = repo.save(token(user_id, "hash_1", Duration::days(7))).await.unwrap();

    let found = repo.find_by_hash("hash_1").await.unwrap().unwrap();
    assert_eq!(found.id, saved.id);
    assert_eq!(found.user_id, user_id);
    assert!(repo.find_by_hash("unknown").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_hash_rejected() {
    let repo = MockTokenRepository::new();
    let user_id = Uuid::new_v4();
    repo.save(token(user_id, "same", Duration::days(7))).await.unwrap();

    assert!(repo.save(token(user_id, "same", Duration::days(7))).await.is_err());
}

async fn is_live(repo: &MockTokenRepository, hash: &str) -> bool {
    repo.find_by_hash(hash).await.unwrap().map_or(false, |t| t.is_valid())
}

#[tokio::test]
async fn test_revoke_token() {
    let repo = MockTokenRepository::new();
    repo.save(token(Uuid::new_v4(), "hash", Duration::days(7))).await.unwrap();

    assert!(is_live(&repo, "hash").await);
    assert!(repo.revoke("hash").await.unwrap());
    assert!(!is_live(&repo, "hash").await);
    assert!(!repo.revoke("missing").await.unwrap());
}

#[tokio::test]
async fn test_revoke_succeeds_once() {
    let repo = MockTokenRepository::new();
    repo.save(token(Uuid::new_v4(), "hash", Duration::days(7))).await.unwrap();

    assert!(repo.revoke("hash").await.unwrap());
    assert!(!repo.revoke("hash").await.unwrap());
}

#[tokio::test]
async fn test_revoke_ignores_expired_token() {
    let repo = MockTokenRepository::new();
    repo.save(token(Uuid::new_v4(), "old", Duration::seconds(-5))).await.unwrap();

    assert!(!repo.revoke("old").await.unwrap());
}

#[tokio::test]
async fn test_delete_expired() {
    let repo = MockTokenRepository::new();
    let user_id = Uuid::new_v4();
    repo.save(token(user_id, "old", Duration::seconds(-5))).await.unwrap();
    repo.save(token(user_id, "fresh", Duration::days(1))).await.unwrap();

    assert!(!is_live(&repo, "old").await);
    assert_eq!(repo.delete_expired().await.unwrap(), 1);
    assert!(repo.find_by_hash("old").await.unwrap().is_none());
    assert!(repo.find_by_hash("fresh").await.unwrap().is_some());
}
