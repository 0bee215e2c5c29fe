//! In-memory implementation of WalletRepository

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::wallet::{NewWallet, Wallet};
use crate::errors::DomainError;

use super::r#trait::WalletRepository;

#[derive(Default)]
struct Store {
    wallets: BTreeMap<i64, Wallet>,
    next_id: i64,
}

/// In-memory wallet store with sequential ids
pub struct MockWalletRepository {
    store: Arc<RwLock<Store>>,
}

impl MockWalletRepository {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::default())),
        }
    }
}

impl Default for MockWalletRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WalletRepository for MockWalletRepository {
    async fn list_for_member(&self, user_id: Uuid) -> Result<Vec<Wallet>, DomainError> {
        let store = self.store.read().await;
        Ok(store
            .wallets
            .values()
            .filter(|w| w.has_member(user_id))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Wallet>, DomainError> {
        let store = self.store.read().await;
        Ok(store.wallets.get(&id).cloned())
    }

    async fn create(&self, wallet: NewWallet) -> Result<Wallet, DomainError> {
        let mut store = self.store.write().await;
        store.next_id += 1;

        let now = Utc::now();
        let mut member_ids = wallet.member_ids;
        member_ids.sort_unstable();
        member_ids.dedup();

        let created = Wallet {
            id: store.next_id,
            name: wallet.name,
            description: wallet.description,
            currency_id: wallet.currency_id,
            member_ids,
            created_at: now,
            updated_at: now,
        };
        store.wallets.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, wallet: Wallet) -> Result<Wallet, DomainError> {
        let mut store = self.store.write().await;
        let stored = store
            .wallets
            .get_mut(&wallet.id)
            .ok_or_else(|| DomainError::not_found("Wallet"))?;

        stored.name = wallet.name;
        stored.description = wallet.description;
        stored.currency_id = wallet.currency_id;
        stored.updated_at = wallet.updated_at;
        Ok(stored.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut store = self.store.write().await;
        Ok(store.wallets.remove(&id).is_some())
    }
}
