//! Domain entities representing core business objects.

pub mod currency;
pub mod entity;
pub mod token;
pub mod user;
pub mod wallet;


// Re-export commonly used types
pub use currency::Currency;
pub use entity::{
    Entity, EntityChanges, EntityFilter, EntityOrdering, EntityOrderingField, NewEntity,
};
pub use token::{Claims, RefreshToken, TokenPair, ACCESS_TOKEN_TYPE};
pub use user::{Privileges, User};
pub use wallet::{NewWallet, Wallet, WalletChanges};
