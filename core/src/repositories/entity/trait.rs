//! Entity persistence. Every operation is scoped to a single wallet.

use async_trait::async_trait;

use crate::domain::entities::entity::{Entity, EntityFilter, EntityOrdering, NewEntity};
use crate::errors::DomainError;

/// Message reported on `name` when the wallet already has an entity with that name
pub const DUPLICATE_ENTITY_NAME_MESSAGE: &str = "Entity with given name already exists in Wallet.";

#[async_trait]
pub trait EntityRepository: Send + Sync {
    /// Entities of `wallet_id` matching `filter`, sorted by `ordering`
    async fn list(
        &self,
        wallet_id: i64,
        filter: &EntityFilter,
        ordering: &EntityOrdering,
    ) -> Result<Vec<Entity>, DomainError>;

    /// Entity `id`, but only if it belongs to `wallet_id`
    async fn find(&self, wallet_id: i64, id: i64) -> Result<Option<Entity>, DomainError>;

    /// Whether `wallet_id` already has an entity called `name`, ignoring entity `exclude_id`
    async fn name_taken(
        &self,
        wallet_id: i64,
        name: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, DomainError>;

    /// # Errors
    /// * `DomainError::Validation` on `name` when the name is taken in the wallet
    async fn create(&self, entity: NewEntity) -> Result<Entity, DomainError>;

    async fn update(&self, entity: Entity) -> Result<Entity, DomainError>;

    /// Remove entity `id` of `wallet_id`. Returns `false` if there was none.
    async fn delete(&self, wallet_id: i64, id: i64) -> Result<bool, DomainError>;
}
