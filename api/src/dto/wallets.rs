use serde::{Deserialize, Serialize};

use budgetory_core::domain::entities::currency::Currency;
use budgetory_core::domain::entities::wallet::Wallet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Currency primary key
    pub currency: i64,
}

impl From<Wallet> for WalletResponse {
    fn from(wallet: Wallet) -> Self {
        Self {
            id: wallet.id,
            name: wallet.name,
            description: wallet.description,
            currency: wallet.currency_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyResponse {
    pub id: i64,
    pub name: String,
}

impl From<Currency> for CurrencyResponse {
    fn from(currency: Currency) -> Self {
        Self {
            id: currency.id,
            name: currency.name,
        }
    }
}
