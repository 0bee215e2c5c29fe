//! In-memory implementation of EntityRepository

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::entity::{Entity, EntityFilter, EntityOrdering, NewEntity};
use crate::errors::DomainError;

use super::r#trait::{EntityRepository, DUPLICATE_ENTITY_NAME_MESSAGE};

#[derive(Default)]
struct Store {
    entities: BTreeMap<i64, Entity>,
    next_id: i64,
}

impl Store {
    fn name_taken(&self, wallet_id: i64, name: &str, exclude_id: Option<i64>) -> bool {
        self.entities.values().any(|e| {
            e.wallet_id == wallet_id
                && e.name.to_lowercase() == name.to_lowercase()
                && Some(e.id) != exclude_id
        })
    }
}

/// In-memory entity store with sequential ids
pub struct MockEntityRepository {
    store: Arc<RwLock<Store>>,
}

impl MockEntityRepository {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::default())),
        }
    }
}

impl Default for MockEntityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityRepository for MockEntityRepository {
    async fn list(
        &self,
        wallet_id: i64,
        filter: &EntityFilter,
        ordering: &EntityOrdering,
    ) -> Result<Vec<Entity>, DomainError> {
        let store = self.store.read().await;
        let mut entities: Vec<_> = store
            .entities
            .values()
            .filter(|e| e.wallet_id == wallet_id && filter.matches(e))
            .cloned()
            .collect();
        ordering.sort(&mut entities);
        Ok(entities)
    }

    async fn find(&self, wallet_id: i64, id: i64) -> Result<Option<Entity>, DomainError> {
        let store = self.store.read().await;
        Ok(store
            .entities
            .get(&id)
            .filter(|e| e.wallet_id == wallet_id)
            .cloned())
    }

    async fn name_taken(
        &self,
        wallet_id: i64,
        name: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, DomainError> {
        let store = self.store.read().await;
        Ok(store.name_taken(wallet_id, name, exclude_id))
    }

    async fn create(&self, entity: NewEntity) -> Result<Entity, DomainError> {
        let mut store = self.store.write().await;

        if store.name_taken(entity.wallet_id, &entity.name, None) {
            return Err(DomainError::field("name", DUPLICATE_ENTITY_NAME_MESSAGE));
        }

        store.next_id += 1;
        let now = Utc::now();
        let created = Entity {
            id: store.next_id,
            wallet_id: entity.wallet_id,
            name: entity.name,
            description: entity.description,
            is_active: entity.is_active,
            is_deposit: entity.is_deposit,
            created_at: now,
            updated_at: now,
        };
        store.entities.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, entity: Entity) -> Result<Entity, DomainError> {
        let mut store = self.store.write().await;

        if store.name_taken(entity.wallet_id, &entity.name, Some(entity.id)) {
            return Err(DomainError::field("name", DUPLICATE_ENTITY_NAME_MESSAGE));
        }

        match store.entities.get_mut(&entity.id) {
            Some(stored) if stored.wallet_id == entity.wallet_id => {
                *stored = entity.clone();
                Ok(entity)
            }
            _ => Err(DomainError::not_found("Entity")),
        }
    }

    async fn delete(&self, wallet_id: i64, id: i64) -> Result<bool, DomainError> {
        let mut store = self.store.write().await;

        if store.entities.get(&id).map(|e| e.wallet_id) != Some(wallet_id) {
            return Ok(false);
        }
        Ok(store.entities.remove(&id).is_some())
    }
}
