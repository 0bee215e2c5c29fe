//! Request and response bodies

pub mod entities;
pub mod users;
pub mod wallets;

pub use entities::{EntityListQuery, EntityResponse};
pub use users::{LoginRequest, RefreshRequest, TokenResponse};
pub use wallets::{CurrencyResponse, WalletResponse};
