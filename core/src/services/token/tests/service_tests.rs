//! Unit tests for token service

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;

use crate::domain::entities::token::{Claims, RefreshToken};
use crate::domain::entities::user::{Privileges, User};
use crate::errors::{DomainError, TokenError};
use crate::repositories::mock::MockTokenRepository;
use crate::repositories::TokenRepository;
use crate::services::token::{
    hash_token, TokenCleanupConfig, TokenCleanupService, TokenService, TokenServiceConfig,
    REFRESH_TOKEN_LENGTH,
};

fn config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        ..Default::default()
    }
}

fn service() -> (TokenService<MockTokenRepository>, Arc<MockTokenRepository>) {
    let repo = Arc::new(MockTokenRepository::new());
    (TokenService::new(repo.clone(), config()), repo)
}

fn user() -> User {
    User::new("anna@example.com".to_string(), None, "hash".to_string())
        .with_privileges(Privileges::Superuser)
}

#[tokio::test]
async fn test_generate_and_verify_access_token() {
    let (service, _) = service();
    let user = user();

    let pair = service.generate_tokens(&user).await.unwrap();
    let claims = service.verify_access_token(&pair.access).unwrap();

    assert_eq!(claims.user_id().unwrap(), user.id);
    assert_eq!(claims.email, "anna@example.com");
    assert!(claims.is_superuser);
    assert_eq!(claims.iss, "budgetory");
    assert_eq!(claims.aud, "budgetory-api");
}

#[tokio::test]
async fn test_refresh_token_is_stored_hashed() {
    let (service, repo) = service();
    let pair = service.generate_tokens(&user()).await.unwrap();

    assert_eq!(pair.refresh.len(), REFRESH_TOKEN_LENGTH);
    assert!(pair.refresh.chars().all(|c| c.is_ascii_alphanumeric()));
    assert!(repo.find_by_hash(&pair.refresh).await.unwrap().is_none());
    let stored = repo.find_by_hash(&hash_token(&pair.refresh)).await.unwrap().unwrap();
    assert!(stored.is_valid());
}

#[test]
fn test_hash_token_is_sha256_hex() {
    let hash = hash_token("token");
    assert_eq!(hash.len(), 64);
    assert_eq!(hash, hash_token("token"));
    assert_ne!(hash, hash_token("other"));
}

#[tokio::test]
async fn test_verify_rejects_garbage() {
    let (service, _) = service();
    let result = service.verify_access_token("not.a.jwt");

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidTokenFormat))
    ));
}

#[tokio::test]
async fn test_verify_rejects_other_secret() {
    let (service, _) = service();
    let other = TokenService::new(
        Arc::new(MockTokenRepository::new()),
        TokenServiceConfig {
            jwt_secret: "another-secret".to_string(),
            ..Default::default()
        },
    );
    let pair = other.generate_tokens(&user()).await.unwrap();

    assert!(service.verify_access_token(&pair.access).is_err());
}

#[tokio::test]
async fn test_verify_rejects_expired_token() {
    let (service, _) = service();
    let claims = Claims::new_access_token(&user(), "budgetory", "budgetory-api", Duration::minutes(-5));
    let token = service.encode_jwt(&claims).unwrap();

    assert!(matches!(
        service.verify_access_token(&token),
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[tokio::test]
async fn test_verify_rejects_wrong_audience_and_type() {
    let (service, _) = service();

    let claims = Claims::new_access_token(&user(), "budgetory", "somebody-else", Duration::minutes(5));
    let token = service.encode_jwt(&claims).unwrap();
    assert!(service.verify_access_token(&token).is_err());

    let mut claims = Claims::new_access_token(&user(), "budgetory", "budgetory-api", Duration::minutes(5));
    claims.token_type = "refresh".to_string();
    let token = service.encode_jwt(&claims).unwrap();
    assert!(service.verify_access_token(&token).is_err());
}

#[tokio::test]
async fn test_consume_refresh_token_only_once() {
    let (service, _) = service();
    let user = user();
    let pair = service.generate_tokens(&user).await.unwrap();

    assert_eq!(service.consume_refresh_token(&pair.refresh).await.unwrap(), user.id);
    assert!(matches!(
        service.consume_refresh_token(&pair.refresh).await,
        Err(DomainError::Token(TokenError::TokenRevoked))
    ));
}

#[tokio::test]
async fn test_consume_unknown_refresh_token() {
    let (service, _) = service();

    assert!(matches!(
        service.consume_refresh_token("unknown").await,
        Err(DomainError::Token(TokenError::InvalidRefreshToken))
    ));
}

#[tokio::test]
async fn test_consume_expired_refresh_token() {
    let repo = Arc::new(MockTokenRepository::new());
    let service = TokenService::new(
        repo,
        TokenServiceConfig {
            refresh_token_lifetime: Duration::seconds(-1),
            ..config()
        },
    );
    let pair = service.generate_tokens(&user()).await.unwrap();

    assert!(matches!(
        service.consume_refresh_token(&pair.refresh).await,
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

/// Token store that suspends after every lookup, letting a second refresh
/// read the same row before the first one revokes it
struct SlowLookupRepository(MockTokenRepository);

#[async_trait]
impl TokenRepository for SlowLookupRepository {
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        self.0.save(token).await
    }

    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError> {
        let found = self.0.find_by_hash(token_hash).await;
        tokio::task::yield_now().await;
        found
    }

    async fn revoke(&self, token_hash: &str) -> Result<bool, DomainError> {
        self.0.revoke(token_hash).await
    }

    async fn delete_expired(&self) -> Result<usize, DomainError> {
        self.0.delete_expired().await
    }
}

#[tokio::test]
async fn test_concurrent_refreshes_exchange_token_once() {
    let service = TokenService::new(Arc::new(SlowLookupRepository(MockTokenRepository::new())), config());
    let pair = service.generate_tokens(&user()).await.unwrap();

    let (first, second) = tokio::join!(
        service.consume_refresh_token(&pair.refresh),
        service.consume_refresh_token(&pair.refresh)
    );

    assert_eq!(first.is_ok() as u8 + second.is_ok() as u8, 1);
    let failure = if first.is_err() { first } else { second };
    assert!(matches!(failure, Err(DomainError::Token(TokenError::TokenRevoked))));
}

#[tokio::test]
async fn test_cleanup_removes_expired_tokens() {
    let repo = Arc::new(MockTokenRepository::new());
    let expired = TokenService::new(
        repo.clone(),
        TokenServiceConfig {
            refresh_token_lifetime: Duration::seconds(-1),
            ..config()
        },
    );
    expired.generate_tokens(&user()).await.unwrap();
    TokenService::new(repo.clone(), config()).generate_tokens(&user()).await.unwrap();

    let cleanup = TokenCleanupService::new(repo.clone(), TokenCleanupConfig::default());
    assert_eq!(cleanup.run_cleanup().await.unwrap(), 1);

    let disabled = TokenCleanupService::new(
        repo,
        TokenCleanupConfig {
            enabled: false,
            ..Default::default()
        },
    );
    assert_eq!(disabled.run_cleanup().await.unwrap(), 0);
}
