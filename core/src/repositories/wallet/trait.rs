//! Wallet persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::wallet::{NewWallet, Wallet};
use crate::errors::DomainError;

#[async_trait]
pub trait WalletRepository: Send + Sync {
    /// Wallets `user_id` is a member of, ordered by id
    async fn list_for_member(&self, user_id: Uuid) -> Result<Vec<Wallet>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Wallet>, DomainError>;

    /// Persist a wallet together with its members
    async fn create(&self, wallet: NewWallet) -> Result<Wallet, DomainError>;

    /// Update name, description and currency. Membership is left unchanged.
    async fn update(&self, wallet: Wallet) -> Result<Wallet, DomainError>;

    /// Remove a wallet. Returns `false` if it did not exist.
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    /// Whether `user_id` belongs to wallet `wallet_id`. A missing wallet has no members.
    async fn is_member(&self, wallet_id: i64, user_id: Uuid) -> Result<bool, DomainError> {
        Ok(self
            .find_by_id(wallet_id)
            .await?
            .map(|wallet| wallet.has_member(user_id))
            .unwrap_or(false))
    }
}
