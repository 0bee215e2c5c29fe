//! Repository interfaces and their in-memory implementations.

pub mod currency;
pub mod entity;
pub mod token;
pub mod user;
pub mod wallet;

pub use currency::CurrencyRepository;
pub use entity::EntityRepository;
pub use token::TokenRepository;
pub use user::UserRepository;
pub use wallet::WalletRepository;

/// In-memory repositories used by tests and `STORAGE=memory` runs
pub mod mock {
    pub use super::currency::MockCurrencyRepository;
    pub use super::entity::MockEntityRepository;
    pub use super::token::MockTokenRepository;
    pub use super::user::MockUserRepository;
    pub use super::wallet::MockWalletRepository;
}
