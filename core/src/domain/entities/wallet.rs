//! Wallet entity. Wallets group entities and are shared by their members.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of a wallet name
pub const WALLET_NAME_MAX_LENGTH: usize = 128;

/// Maximum length of a wallet description
pub const WALLET_DESCRIPTION_MAX_LENGTH: usize = 255;

/// Wallet entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    /// Unique identifier
    pub id: i64,

    /// Wallet name
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// Currency the wallet is kept in
    pub currency_id: i64,

    /// Users allowed to access the wallet
    pub member_ids: Vec<Uuid>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Wallet {
    /// Whether `user_id` belongs to the wallet
    pub fn has_member(&self, user_id: Uuid) -> bool {
        self.member_ids.contains(&user_id)
    }
}

/// Data needed to create a wallet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWallet {
    pub name: String,
    pub description: Option<String>,
    pub currency_id: i64,
    /// Initial members; the creator is always one of them
    pub member_ids: Vec<Uuid>,
}

/// Changes applied by an update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub currency_id: Option<i64>,
}

impl WalletChanges {
    /// Applies the changes to `wallet`
    pub fn apply(self, wallet: &mut Wallet) {
        if let Some(name) = self.name {
            wallet.name = name;
        }
        if let Some(description) = self.description {
            wallet.description = description;
        }
        if let Some(currency_id) = self.currency_id {
            wallet.currency_id = currency_id;
        }
        wallet.updated_at = Utc::now();
    }
}
