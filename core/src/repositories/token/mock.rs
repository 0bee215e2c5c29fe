//! In-memory refresh tokens keyed by digest

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

use super::r#trait::TokenRepository;

#[derive(Default)]
pub struct MockTokenRepository {
    by_hash: RwLock<HashMap<String, RefreshToken>>,
}

impl MockTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let mut by_hash = self.by_hash.write().await;
        if by_hash.contains_key(&token.token_hash) {
            return Err(DomainError::internal("refresh token hash collision"));
        }

        by_hash.insert(token.token_hash.clone(), token.clone());
        Ok(token)
    }

    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError> {
        Ok(self.by_hash.read().await.get(token_hash).cloned())
    }

    async fn revoke(&self, token_hash: &str) -> Result<bool, DomainError> {
        let mut by_hash = self.by_hash.write().await;
        match by_hash.get_mut(token_hash) {
            Some(token) if token.is_valid() => {
                token.revoke();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_expired(&self) -> Result<usize, DomainError> {
        let mut by_hash = self.by_hash.write().await;
        let before = by_hash.len();
        by_hash.retain(|_, token| !token.is_expired());
        Ok(before - by_hash.len())
    }
}
