//! Refresh token persistence.
//!
//! Only the SHA-256 hash of an opaque refresh token is ever stored, so every
//! lookup goes through the hash.

use async_trait::async_trait;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Store a newly issued refresh token
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Look a token up by the hash of its value
    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Revoke a live token as a single check-and-set. Returns `true` only for
    /// the call that flipped it; an unknown, expired or already revoked token
    /// yields `false`.
    async fn revoke(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Drop tokens past their expiry, returning how many were removed
    async fn delete_expired(&self) -> Result<usize, DomainError>;
}
