use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::entities::currency::Currency;
use crate::domain::entities::wallet::{NewWallet, Wallet};
use crate::domain::value_objects::WalletForm;
use crate::errors::{DomainError, DomainResult, FieldErrors};
use crate::repositories::{CurrencyRepository, WalletRepository};

/// Validation message for a reference to a missing record
pub fn invalid_pk_message(pk: i64) -> String {
    format!("Invalid pk \"{}\" - object does not exist.", pk)
}

/// Wallet CRUD scoped to the requesting user's memberships, plus the currency list
pub struct WalletService<W, C>
where
    W: WalletRepository,
    C: CurrencyRepository,
{
    wallet_repository: Arc<W>,
    currency_repository: Arc<C>,
}

impl<W, C> WalletService<W, C>
where
    W: WalletRepository,
    C: CurrencyRepository,
{
    pub fn new(wallet_repository: Arc<W>, currency_repository: Arc<C>) -> Self {
        Self {
            wallet_repository,
            currency_repository,
        }
    }

    /// All currencies ordered by name
    pub async fn list_currencies(&self) -> DomainResult<Vec<Currency>> {
        self.currency_repository.list().await
    }

    pub async fn list(&self, user_id: Uuid) -> DomainResult<Vec<Wallet>> {
        self.wallet_repository.list_for_member(user_id).await
    }

    /// Wallet `wallet_id`. Wallets the user is not a member of are reported as missing.
    pub async fn get(&self, user_id: Uuid, wallet_id: i64) -> DomainResult<Wallet> {
        self.wallet_repository
            .find_by_id(wallet_id)
            .await?
            .filter(|wallet| wallet.has_member(user_id))
            .ok_or_else(|| DomainError::not_found("Wallet"))
    }

    /// Create a wallet with the requesting user as its only member
    pub async fn create(&self, user_id: Uuid, form: WalletForm) -> DomainResult<Wallet> {
        self.validate(&form, false).await?;

        let (Some(name), Some(currency_id)) = (form.name, form.currency) else {
            return Err(DomainError::internal("validated wallet form is incomplete"));
        };

        let wallet = self
            .wallet_repository
            .create(NewWallet {
                name: name.trim().to_string(),
                description: form.description,
                currency_id,
                member_ids: vec![user_id],
            })
            .await?;

        info!(wallet_id = wallet.id, %user_id, "Wallet created");
        Ok(wallet)
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        wallet_id: i64,
        form: WalletForm,
        partial: bool,
    ) -> DomainResult<Wallet> {
        let mut wallet = self.get(user_id, wallet_id).await?;
        self.validate(&form, partial).await?;

        form.into_changes(partial).apply(&mut wallet);
        self.wallet_repository.update(wallet).await
    }

    pub async fn delete(&self, user_id: Uuid, wallet_id: i64) -> DomainResult<()> {
        let wallet = self.get(user_id, wallet_id).await?;
        self.wallet_repository.delete(wallet.id).await?;

        info!(wallet_id, %user_id, "Wallet deleted");
        Ok(())
    }

    async fn validate(&self, form: &WalletForm, partial: bool) -> DomainResult<()> {
        let mut errors: FieldErrors = form.field_errors(partial);

        if let Some(currency_id) = form.currency {
            if self.currency_repository.find_by_id(currency_id).await?.is_none() {
                errors.add("currency", invalid_pk_message(currency_id));
            }
        }

        Ok(errors.into_result()?)
    }
}
