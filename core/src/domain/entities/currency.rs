//! Currency entity.

use serde::{Deserialize, Serialize};

/// A currency wallets can be kept in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Unique identifier
    pub id: i64,

    /// Currency code, e.g. `PLN`
    pub name: String,
}

impl Currency {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
