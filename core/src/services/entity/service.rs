use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::entities::entity::{Entity, EntityFilter, EntityOrdering};
use crate::domain::value_objects::EntityForm;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::entity::DUPLICATE_ENTITY_NAME_MESSAGE;
use crate::repositories::{EntityRepository, WalletRepository};

/// Reported when the requesting user is not a member of the path wallet
pub const WALLET_ACCESS_DENIED_MESSAGE: &str = "User does not have access to Wallet.";

/// Entity CRUD restricted to one wallet at a time.
///
/// Every operation first checks that the user belongs to the wallet, then
/// works only on that wallet's entities. The owning wallet always comes from
/// the caller, never from submitted data.
pub struct EntityService<W, E>
where
    W: WalletRepository,
    E: EntityRepository,
{
    wallet_repository: Arc<W>,
    entity_repository: Arc<E>,
}

impl<W, E> EntityService<W, E>
where
    W: WalletRepository,
    E: EntityRepository,
{
    pub fn new(wallet_repository: Arc<W>, entity_repository: Arc<E>) -> Self {
        Self {
            wallet_repository,
            entity_repository,
        }
    }

    /// Fails with `PermissionDenied` unless `user_id` is a member of `wallet_id`
    pub async fn check_access(&self, user_id: Uuid, wallet_id: i64) -> DomainResult<()> {
        if self.wallet_repository.is_member(wallet_id, user_id).await? {
            Ok(())
        } else {
            debug!(%user_id, wallet_id, "Wallet access denied");
            Err(DomainError::permission_denied(WALLET_ACCESS_DENIED_MESSAGE))
        }
    }

    pub async fn list(
        &self,
        user_id: Uuid,
        wallet_id: i64,
        filter: &EntityFilter,
        ordering: &EntityOrdering,
    ) -> DomainResult<Vec<Entity>> {
        self.check_access(user_id, wallet_id).await?;
        self.entity_repository.list(wallet_id, filter, ordering).await
    }

    pub async fn get(&self, user_id: Uuid, wallet_id: i64, entity_id: i64) -> DomainResult<Entity> {
        self.check_access(user_id, wallet_id).await?;
        self.find(wallet_id, entity_id).await
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        wallet_id: i64,
        form: EntityForm,
    ) -> DomainResult<Entity> {
        self.check_access(user_id, wallet_id).await?;
        self.validate(wallet_id, &form, false, None).await?;

        let entity = self
            .entity_repository
            .create(form.into_new_entity(wallet_id))
            .await?;

        info!(wallet_id, entity_id = entity.id, "Entity created");
        Ok(entity)
    }

    /// Full (`partial == false`) or partial update
    pub async fn update(
        &self,
        user_id: Uuid,
        wallet_id: i64,
        entity_id: i64,
        form: EntityForm,
        partial: bool,
    ) -> DomainResult<Entity> {
        self.check_access(user_id, wallet_id).await?;
        let mut entity = self.find(wallet_id, entity_id).await?;
        self.validate(wallet_id, &form, partial, Some(entity_id)).await?;

        form.into_changes(partial).apply(&mut entity);
        self.entity_repository.update(entity).await
    }

    pub async fn delete(&self, user_id: Uuid, wallet_id: i64, entity_id: i64) -> DomainResult<()> {
        self.check_access(user_id, wallet_id).await?;

        if !self.entity_repository.delete(wallet_id, entity_id).await? {
            return Err(DomainError::not_found("Entity"));
        }

        info!(wallet_id, entity_id, "Entity deleted");
        Ok(())
    }

    async fn find(&self, wallet_id: i64, entity_id: i64) -> DomainResult<Entity> {
        self.entity_repository
            .find(wallet_id, entity_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Entity"))
    }

    async fn validate(
        &self,
        wallet_id: i64,
        form: &EntityForm,
        partial: bool,
        exclude_id: Option<i64>,
    ) -> DomainResult<()> {
        let mut errors = form.field_errors(partial);

        if let Some(name) = form.name.as_deref().map(str::trim) {
            if !errors.contains("name")
                && self
                    .entity_repository
                    .name_taken(wallet_id, name, exclude_id)
                    .await?
            {
                errors.add("name", DUPLICATE_ENTITY_NAME_MESSAGE);
            }
        }

        Ok(errors.into_result()?)
    }
}
