//! MySQL implementation of WalletRepository.
//!
//! Membership lives in `wallet_members`; a wallet row and its member rows are
//! written in one transaction.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, QueryBuilder, Row};
use uuid::Uuid;

use budgetory_core::domain::entities::wallet::{NewWallet, Wallet};
use budgetory_core::errors::DomainError;
use budgetory_core::repositories::WalletRepository;

use super::{column, uuid_column};
use crate::database::db_error;

pub struct MySqlWalletRepository {
    pool: MySqlPool,
}

impl MySqlWalletRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_wallet(row: &MySqlRow) -> Result<Wallet, DomainError> {
        Ok(Wallet {
            id: column(row, "id")?,
            name: column(row, "name")?,
            description: column(row, "description")?,
            currency_id: column(row, "currency_id")?,
            member_ids: Vec::new(),
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    /// Member ids of every wallet in `wallet_ids`, sorted
    async fn load_members(&self, wallet_ids: &[i64]) -> Result<HashMap<i64, Vec<Uuid>>, DomainError> {
        let mut members: HashMap<i64, Vec<Uuid>> = HashMap::new();
        if wallet_ids.is_empty() {
            return Ok(members);
        }

        let mut builder =
            QueryBuilder::new("SELECT wallet_id, user_id FROM wallet_members WHERE wallet_id IN (");
        let mut separated = builder.separated(", ");
        for id in wallet_ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY wallet_id, user_id");

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to load wallet members"))?;

        for row in &rows {
            let wallet_id: i64 = row
                .try_get("wallet_id")
                .map_err(|e| DomainError::internal(format!("Failed to get wallet_id: {}", e)))?;
            members
                .entry(wallet_id)
                .or_default()
                .push(uuid_column(row, "user_id")?);
        }

        Ok(members)
    }

    async fn with_members(&self, mut wallets: Vec<Wallet>) -> Result<Vec<Wallet>, DomainError> {
        let ids: Vec<i64> = wallets.iter().map(|w| w.id).collect();
        let mut members = self.load_members(&ids).await?;
        for wallet in &mut wallets {
            wallet.member_ids = members.remove(&wallet.id).unwrap_or_default();
        }
        Ok(wallets)
    }
}

#[async_trait]
impl WalletRepository for MySqlWalletRepository {
    async fn list_for_member(&self, user_id: Uuid) -> Result<Vec<Wallet>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT w.id, w.name, w.description, w.currency_id, w.created_at, w.updated_at
            FROM wallets w
            INNER JOIN wallet_members m ON m.wallet_id = w.id
            WHERE m.user_id = ?
            ORDER BY w.id
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list wallets"))?;

        let wallets = rows
            .iter()
            .map(Self::row_to_wallet)
            .collect::<Result<Vec<_>, _>>()?;

        self.with_members(wallets).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Wallet>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, currency_id, created_at, updated_at
            FROM wallets
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find wallet"))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let wallet = Self::row_to_wallet(&row)?;
        Ok(self.with_members(vec![wallet]).await?.pop())
    }

    async fn create(&self, wallet: NewWallet) -> Result<Wallet, DomainError> {
        let now = Utc::now();
        let mut member_ids = wallet.member_ids;
        member_ids.sort();
        member_ids.dedup();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO wallets (name, description, currency_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&wallet.name)
        .bind(&wallet.description)
        .bind(wallet.currency_id)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to create wallet"))?;

        let id = inserted.last_insert_id() as i64;

        if !member_ids.is_empty() {
            let mut builder = QueryBuilder::new("INSERT INTO wallet_members (wallet_id, user_id) ");
            builder.push_values(&member_ids, |mut b, user_id| {
                b.push_bind(id).push_bind(user_id.to_string());
            });
            builder
                .build()
                .execute(&mut *tx)
                .await
                .map_err(db_error("Failed to add wallet members"))?;
        }

        tx.commit()
            .await
            .map_err(db_error("Failed to commit wallet"))?;

        tracing::debug!(wallet_id = id, members = member_ids.len(), "Wallet created");

        Ok(Wallet {
            id,
            name: wallet.name,
            description: wallet.description,
            currency_id: wallet.currency_id,
            member_ids,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update(&self, wallet: Wallet) -> Result<Wallet, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE wallets
            SET name = ?, description = ?, currency_id = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&wallet.name)
        .bind(&wallet.description)
        .bind(wallet.currency_id)
        .bind(wallet.updated_at)
        .bind(wallet.id)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update wallet"))?;

        if result.rows_affected() == 0 {
            return self
                .find_by_id(wallet.id)
                .await?
                .ok_or_else(|| DomainError::not_found("Wallet"));
        }

        Ok(wallet)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        // Members and entities go with the wallet via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM wallets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete wallet"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn is_member(&self, wallet_id: i64, user_id: Uuid) -> Result<bool, DomainError> {
        let found: Option<i64> = sqlx::query_scalar(
            "SELECT wallet_id FROM wallet_members WHERE wallet_id = ? AND user_id = ?",
        )
        .bind(wallet_id)
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to check wallet membership"))?;

        Ok(found.is_some())
    }
}
