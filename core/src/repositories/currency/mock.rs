//! In-memory implementation of CurrencyRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::currency::Currency;
use crate::errors::DomainError;

use super::r#trait::CurrencyRepository;

/// Currencies every fresh database is seeded with
pub const DEFAULT_CURRENCIES: [&str; 4] = ["EUR", "GBP", "PLN", "USD"];

/// In-memory currency store
pub struct MockCurrencyRepository {
    currencies: Arc<RwLock<Vec<Currency>>>,
}

impl MockCurrencyRepository {
    pub fn new() -> Self {
        Self {
            currencies: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Repository holding the same currencies the schema migrations seed
    pub fn seeded() -> Self {
        let currencies = DEFAULT_CURRENCIES
            .iter()
            .zip(1..)
            .map(|(name, id)| Currency::new(id, *name))
            .collect();

        Self {
            currencies: Arc::new(RwLock::new(currencies)),
        }
    }
}

impl Default for MockCurrencyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CurrencyRepository for MockCurrencyRepository {
    async fn list(&self) -> Result<Vec<Currency>, DomainError> {
        let mut currencies = self.currencies.read().await.clone();
        currencies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(currencies)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Currency>, DomainError> {
        let currencies = self.currencies.read().await;
        Ok(currencies.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Currency>, DomainError> {
        let currencies = self.currencies.read().await;
        Ok(currencies.iter().find(|c| c.name == name).cloned())
    }

    async fn create(&self, name: &str) -> Result<Currency, DomainError> {
        let mut currencies = self.currencies.write().await;

        if let Some(existing) = currencies.iter().find(|c| c.name == name) {
            return Ok(existing.clone());
        }

        let id = currencies.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let currency = Currency::new(id, name);
        currencies.push(currency.clone());
        Ok(currency)
    }
}
