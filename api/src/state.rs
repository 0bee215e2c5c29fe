//! Shared application state and the storage backends it can run on

use std::sync::Arc;

use budgetory_core::repositories::mock::{
    MockCurrencyRepository, MockEntityRepository, MockTokenRepository, MockUserRepository,
    MockWalletRepository,
};
use budgetory_core::repositories::{
    CurrencyRepository, EntityRepository, TokenRepository, UserRepository, WalletRepository,
};
use budgetory_core::services::{
    AuthService, AuthServiceConfig, DemoLoginService, DemoServiceConfig, EntityService,
    TokenService, TokenServiceConfig, WalletService,
};
use budgetory_shared::AuthConfig;

/// A family of repository implementations
pub trait Storage: 'static {
    type Users: UserRepository + 'static;
    type Tokens: TokenRepository + 'static;
    type Wallets: WalletRepository + 'static;
    type Currencies: CurrencyRepository + 'static;
    type Entities: EntityRepository + 'static;
}

/// Repository instances of one storage backend
pub struct Repositories<S: Storage> {
    pub users: Arc<S::Users>,
    pub tokens: Arc<S::Tokens>,
    pub wallets: Arc<S::Wallets>,
    pub currencies: Arc<S::Currencies>,
    pub entities: Arc<S::Entities>,
}

/// In-process storage, lost on restart
pub struct MemoryStorage;

impl Storage for MemoryStorage {
    type Users = MockUserRepository;
    type Tokens = MockTokenRepository;
    type Wallets = MockWalletRepository;
    type Currencies = MockCurrencyRepository;
    type Entities = MockEntityRepository;
}

impl Repositories<MemoryStorage> {
    /// Empty repositories with the default currencies
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MockUserRepository::new()),
            tokens: Arc::new(MockTokenRepository::new()),
            wallets: Arc::new(MockWalletRepository::new()),
            currencies: Arc::new(MockCurrencyRepository::seeded()),
            entities: Arc::new(MockEntityRepository::new()),
        }
    }
}

#[cfg(feature = "mysql")]
pub use mysql::MySqlStorage;

#[cfg(feature = "mysql")]
mod mysql {
    use std::sync::Arc;

    use budgetory_infra::database::{
        DatabasePool, MySqlCurrencyRepository, MySqlEntityRepository, MySqlTokenRepository,
        MySqlUserRepository, MySqlWalletRepository,
    };

    use super::{Repositories, Storage};

    /// MySQL storage through the shared connection pool
    pub struct MySqlStorage;

    impl Storage for MySqlStorage {
        type Users = MySqlUserRepository;
        type Tokens = MySqlTokenRepository;
        type Wallets = MySqlWalletRepository;
        type Currencies = MySqlCurrencyRepository;
        type Entities = MySqlEntityRepository;
    }

    impl Repositories<MySqlStorage> {
        pub fn mysql(pool: &DatabasePool) -> Self {
            let pool = pool.inner();
            Self {
                users: Arc::new(MySqlUserRepository::new(pool.clone())),
                tokens: Arc::new(MySqlTokenRepository::new(pool.clone())),
                wallets: Arc::new(MySqlWalletRepository::new(pool.clone())),
                currencies: Arc::new(MySqlCurrencyRepository::new(pool.clone())),
                entities: Arc::new(MySqlEntityRepository::new(pool.clone())),
            }
        }
    }
}

/// Services shared by every request handler
pub struct AppState<S: Storage> {
    pub auth_service: Arc<AuthService<S::Users, S::Tokens>>,
    pub token_service: Arc<TokenService<S::Tokens>>,
    pub demo_service: Arc<DemoLoginService<S::Users, S::Tokens, S::Wallets, S::Currencies, S::Entities>>,
    pub wallet_service: Arc<WalletService<S::Wallets, S::Currencies>>,
    pub entity_service: Arc<EntityService<S::Wallets, S::Entities>>,
}

impl<S: Storage> AppState<S> {
    /// Wire the services over `repositories`
    pub fn new(repositories: Repositories<S>, config: &AuthConfig) -> Self {
        let Repositories {
            users,
            tokens,
            wallets,
            currencies,
            entities,
        } = repositories;

        let token_service = Arc::new(TokenService::new(
            tokens,
            TokenServiceConfig::from(&config.jwt),
        ));
        let auth_service = Arc::new(AuthService::new(
            users.clone(),
            token_service.clone(),
            AuthServiceConfig::from(config),
        ));
        let demo_service = Arc::new(DemoLoginService::new(
            users,
            wallets.clone(),
            currencies.clone(),
            entities.clone(),
            token_service.clone(),
            DemoServiceConfig::from(config),
        ));
        let wallet_service = Arc::new(WalletService::new(wallets.clone(), currencies));
        let entity_service = Arc::new(EntityService::new(wallets, entities));

        Self {
            auth_service,
            token_service,
            demo_service,
            wallet_service,
            entity_service,
        }
    }
}
