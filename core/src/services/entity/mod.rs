//! Wallet-scoped entity management

mod service;

#[cfg(test)]
mod tests;

pub use service::{EntityService, WALLET_ACCESS_DENIED_MESSAGE};
