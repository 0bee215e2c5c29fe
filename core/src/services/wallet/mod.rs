//! Wallets and currencies

mod service;

#[cfg(test)]
mod tests;

pub use service::{invalid_pk_message, WalletService};
