//! Currency lookup.

use async_trait::async_trait;

use crate::domain::entities::currency::Currency;
use crate::errors::DomainError;

#[async_trait]
pub trait CurrencyRepository: Send + Sync {
    /// All currencies ordered by name
    async fn list(&self) -> Result<Vec<Currency>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Currency>, DomainError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Currency>, DomainError>;

    /// Add a currency. Names are unique; adding an existing name returns the stored record.
    async fn create(&self, name: &str) -> Result<Currency, DomainError>;
}
