//! MySQL implementation of EntityRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder};

use budgetory_core::domain::entities::entity::{
    Entity, EntityFilter, EntityOrdering, EntityOrderingField, NewEntity,
};
use budgetory_core::errors::DomainError;
use budgetory_core::repositories::entity::DUPLICATE_ENTITY_NAME_MESSAGE;
use budgetory_core::repositories::EntityRepository;

use super::{column, escape_like};
use crate::database::{db_error, is_unique_violation};

const SELECT_ENTITY: &str = r#"
    SELECT id, wallet_id, name, description, is_active, is_deposit, created_at, updated_at
    FROM entities
"#;

pub struct MySqlEntityRepository {
    pool: MySqlPool,
}

impl MySqlEntityRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: &MySqlRow) -> Result<Entity, DomainError> {
        Ok(Entity {
            id: column(row, "id")?,
            wallet_id: column(row, "wallet_id")?,
            name: column(row, "name")?,
            description: column(row, "description")?,
            is_active: column(row, "is_active")?,
            is_deposit: column(row, "is_deposit")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

/// Builds the listing query for `wallet_id`
pub(crate) fn list_query(
    wallet_id: i64,
    filter: &EntityFilter,
    ordering: &EntityOrdering,
) -> QueryBuilder<'static, MySql> {
    let mut builder = QueryBuilder::new(SELECT_ENTITY);
    builder.push(" WHERE wallet_id = ").push_bind(wallet_id);

    if let Some(name) = &filter.name {
        // Column collation is case-insensitive
        builder
            .push(" AND name LIKE ")
            .push_bind(format!("%{}%", escape_like(name)));
    }
    if let Some(is_active) = filter.is_active {
        builder.push(" AND is_active = ").push_bind(is_active);
    }
    if let Some(is_deposit) = filter.is_deposit {
        builder.push(" AND is_deposit = ").push_bind(is_deposit);
    }

    builder.push(" ORDER BY ");
    let mut order = builder.separated(", ");
    for (field, descending) in ordering.keys() {
        order.push(field.column());
        order.push_unseparated(if *descending { " DESC" } else { " ASC" });
    }
    if !ordering.keys().iter().any(|(field, _)| *field == EntityOrderingField::Id) {
        order.push("id ASC");
    }

    builder
}

#[async_trait]
impl EntityRepository for MySqlEntityRepository {
    async fn list(
        &self,
        wallet_id: i64,
        filter: &EntityFilter,
        ordering: &EntityOrdering,
    ) -> Result<Vec<Entity>, DomainError> {
        let rows = list_query(wallet_id, filter, ordering)
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list entities"))?;

        rows.iter().map(Self::row_to_entity).collect()
    }

    async fn find(&self, wallet_id: i64, id: i64) -> Result<Option<Entity>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = ? AND wallet_id = ?", SELECT_ENTITY))
            .bind(id)
            .bind(wallet_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find entity"))?;

        row.as_ref().map(Self::row_to_entity).transpose()
    }

    async fn name_taken(
        &self,
        wallet_id: i64,
        name: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, DomainError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM entities
            WHERE wallet_id = ? AND name = ? AND (? IS NULL OR id <> ?)
            "#,
        )
        .bind(wallet_id)
        .bind(name)
        .bind(exclude_id)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to check entity name"))?;

        Ok(count > 0)
    }

    async fn create(&self, entity: NewEntity) -> Result<Entity, DomainError> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO entities
                (wallet_id, name, description, is_active, is_deposit, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(entity.wallet_id)
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(entity.is_active)
        .bind(entity.is_deposit)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(Entity {
                id: done.last_insert_id() as i64,
                wallet_id: entity.wallet_id,
                name: entity.name,
                description: entity.description,
                is_active: entity.is_active,
                is_deposit: entity.is_deposit,
                created_at: now,
                updated_at: now,
            }),
            Err(e) if is_unique_violation(&e) => {
                Err(DomainError::field("name", DUPLICATE_ENTITY_NAME_MESSAGE))
            }
            Err(e) => Err(db_error("Failed to create entity")(e)),
        }
    }

    async fn update(&self, entity: Entity) -> Result<Entity, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE entities
            SET name = ?, description = ?, is_active = ?, is_deposit = ?, updated_at = ?
            WHERE id = ? AND wallet_id = ?
            "#,
        )
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(entity.is_active)
        .bind(entity.is_deposit)
        .bind(entity.updated_at)
        .bind(entity.id)
        .bind(entity.wallet_id)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) if done.rows_affected() == 0 => self
                .find(entity.wallet_id, entity.id)
                .await?
                .map(|_| entity)
                .ok_or_else(|| DomainError::not_found("Entity")),
            Ok(_) => Ok(entity),
            Err(e) if is_unique_violation(&e) => {
                Err(DomainError::field("name", DUPLICATE_ENTITY_NAME_MESSAGE))
            }
            Err(e) => Err(db_error("Failed to update entity")(e)),
        }
    }

    async fn delete(&self, wallet_id: i64, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM entities WHERE id = ? AND wallet_id = ?")
            .bind(id)
            .bind(wallet_id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete entity"))?;

        Ok(result.rows_affected() > 0)
    }
}
