//! MySQL implementation of CurrencyRepository

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use budgetory_core::domain::entities::currency::Currency;
use budgetory_core::errors::DomainError;
use budgetory_core::repositories::CurrencyRepository;

use super::column;
use crate::database::{db_error, is_unique_violation};

pub struct MySqlCurrencyRepository {
    pool: MySqlPool,
}

impl MySqlCurrencyRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_currency(row: &MySqlRow) -> Result<Currency, DomainError> {
        Ok(Currency {
            id: column(row, "id")?,
            name: column(row, "name")?,
        })
    }
}

#[async_trait]
impl CurrencyRepository for MySqlCurrencyRepository {
    async fn list(&self) -> Result<Vec<Currency>, DomainError> {
        let rows = sqlx::query("SELECT id, name FROM currencies ORDER BY name, id")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list currencies"))?;

        rows.iter().map(Self::row_to_currency).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Currency>, DomainError> {
        let row = sqlx::query("SELECT id, name FROM currencies WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find currency"))?;

        row.as_ref().map(Self::row_to_currency).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Currency>, DomainError> {
        let row = sqlx::query("SELECT id, name FROM currencies WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find currency"))?;

        row.as_ref().map(Self::row_to_currency).transpose()
    }

    async fn create(&self, name: &str) -> Result<Currency, DomainError> {
        let result = sqlx::query("INSERT INTO currencies (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(Currency::new(done.last_insert_id() as i64, name)),
            // Lost a race with a concurrent insert of the same code
            Err(e) if is_unique_violation(&e) => self
                .find_by_name(name)
                .await?
                .ok_or_else(|| DomainError::internal("Currency vanished after conflict")),
            Err(e) => Err(db_error("Failed to create currency")(e)),
        }
    }
}
