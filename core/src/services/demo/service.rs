use std::sync::Arc;

use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::{error, info, warn};
use uuid::Uuid;

use budgetory_shared::config::AuthConfig;

use crate::domain::entities::entity::{EntityFilter, EntityOrdering, NewEntity};
use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;
use crate::domain::entities::wallet::NewWallet;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{
    CurrencyRepository, EntityRepository, TokenRepository, UserRepository, WalletRepository,
};
use crate::services::auth::hash_password;
use crate::services::token::TokenService;

/// Domain of generated demo e-mail addresses
pub const DEMO_EMAIL_DOMAIN: &str = "demo.budgetory.app";

const DEMO_WALLET_NAME: &str = "Demo Wallet";
const DEMO_ENTITIES: [(&str, &str); 4] = [
    ("Supermarket", "Groceries and household goods"),
    ("Landlord", "Monthly rent"),
    ("Employer", "Salary"),
    ("Petrol station", "Fuel"),
];
const DEMO_DEPOSITS: [(&str, &str); 2] = [
    ("Personal account", "Everyday bank account"),
    ("Savings account", "Long term savings"),
];

#[derive(Debug, Clone)]
pub struct DemoServiceConfig {
    pub enabled: bool,
    /// Currency name of the demo wallet
    pub currency: String,
    pub bcrypt_cost: u32,
}

impl From<&AuthConfig> for DemoServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            enabled: config.demo.enabled,
            currency: config.demo.currency.clone(),
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}

/// Creates demo users and signs them in
pub struct DemoLoginService<U, T, W, C, E>
where
    U: UserRepository,
    T: TokenRepository,
    W: WalletRepository,
    C: CurrencyRepository,
    E: EntityRepository,
{
    user_repository: Arc<U>,
    wallet_repository: Arc<W>,
    currency_repository: Arc<C>,
    entity_repository: Arc<E>,
    token_service: Arc<TokenService<T>>,
    config: DemoServiceConfig,
}

impl<U, T, W, C, E> DemoLoginService<U, T, W, C, E>
where
    U: UserRepository,
    T: TokenRepository,
    W: WalletRepository,
    C: CurrencyRepository,
    E: EntityRepository,
{
    pub fn new(
        user_repository: Arc<U>,
        wallet_repository: Arc<W>,
        currency_repository: Arc<C>,
        entity_repository: Arc<E>,
        token_service: Arc<TokenService<T>>,
        config: DemoServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            wallet_repository,
            currency_repository,
            entity_repository,
            token_service,
            config,
        }
    }

    /// Create a demo user with sample data and return its tokens.
    ///
    /// Every failure, including a disabled demo mode, is reported as
    /// `AuthError::DemoLoginFailed`; the cause is only logged.
    pub async fn login(&self) -> DomainResult<TokenPair> {
        if !self.config.enabled {
            error!("Demo login requested while disabled");
            return Err(AuthError::DemoLoginFailed.into());
        }

        match self.create_session().await {
            Ok(tokens) => Ok(tokens),
            Err(e) => {
                error!(error = %e, "Demo login failed");
                Err(AuthError::DemoLoginFailed.into())
            }
        }
    }

    async fn create_session(&self) -> DomainResult<TokenPair> {
        let user = self.create_user().await?;
        let mut wallet_id = None;

        let result = match self.populate_wallet(user.id, &mut wallet_id).await {
            Ok(()) => self.token_service.generate_tokens(&user).await,
            Err(e) => Err(e),
        };
        if result.is_err() {
            self.discard(user.id, wallet_id).await;
        } else {
            info!(user_id = %user.id, "Demo user created");
        }
        result
    }

    /// Best-effort removal of a half-built demo account
    async fn discard(&self, user_id: Uuid, wallet_id: Option<i64>) {
        if let Some(wallet_id) = wallet_id {
            if let Err(e) = self.discard_wallet(wallet_id).await {
                warn!(wallet_id, error = %e, "Failed to remove demo wallet");
            }
        }
        if let Err(e) = self.user_repository.delete(user_id).await {
            warn!(user_id = %user_id, error = %e, "Failed to remove demo user");
        }
    }

    async fn discard_wallet(&self, wallet_id: i64) -> DomainResult<()> {
        let entities = self
            .entity_repository
            .list(wallet_id, &EntityFilter::default(), &EntityOrdering::default())
            .await?;
        for entity in entities {
            self.entity_repository.delete(wallet_id, entity.id).await?;
        }
        self.wallet_repository.delete(wallet_id).await?;
        Ok(())
    }

    async fn create_user(&self) -> DomainResult<User> {
        let tag = Uuid::new_v4().simple().to_string();
        let email = format!("demo_{}@{}", &tag[..12], DEMO_EMAIL_DOMAIN);
        let password: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(24)
            .map(char::from)
            .collect();

        let password_hash = hash_password(password, self.config.bcrypt_cost).await?;
        let mut user = User::new(email, Some("Demo User".to_string()), password_hash).as_demo();
        user.update_last_login();

        self.user_repository.create(user).await
    }

    /// `wallet_id` is set as soon as the wallet exists so a failure while
    /// adding entities can still remove it
    async fn populate_wallet(&self, user_id: Uuid, wallet_id: &mut Option<i64>) -> DomainResult<()> {
        let currency = match self
            .currency_repository
            .find_by_name(&self.config.currency)
            .await?
        {
            Some(currency) => currency,
            None => self.currency_repository.create(&self.config.currency).await?,
        };

        let wallet = self
            .wallet_repository
            .create(NewWallet {
                name: DEMO_WALLET_NAME.to_string(),
                description: Some("Sample wallet with demo data.".to_string()),
                currency_id: currency.id,
                member_ids: vec![user_id],
            })
            .await?;
        *wallet_id = Some(wallet.id);

        for (name, description) in DEMO_ENTITIES {
            self.entity_repository
                .create(NewEntity::new(wallet.id, name).with_description(description))
                .await?;
        }
        for (name, description) in DEMO_DEPOSITS {
            self.entity_repository
                .create(NewEntity::new(wallet.id, name).with_description(description).deposit())
                .await?;
        }

        Ok(())
    }
}
