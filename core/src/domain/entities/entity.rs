//! Entity: a counterparty or deposit tracked inside a wallet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of an entity name
pub const ENTITY_NAME_MAX_LENGTH: usize = 128;

/// Maximum length of an entity description
pub const ENTITY_DESCRIPTION_MAX_LENGTH: usize = 255;

/// Entity owned by a single wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: i64,

    /// Owning wallet. Always taken from the request path, never from the body.
    pub wallet_id: i64,

    /// Name, unique within the wallet
    pub name: String,

    pub description: Option<String>,

    pub is_active: bool,

    /// Whether the entity represents one of the wallet owner's deposits
    pub is_deposit: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data needed to create an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntity {
    pub wallet_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub is_deposit: bool,
}

impl NewEntity {
    pub fn new(wallet_id: i64, name: impl Into<String>) -> Self {
        Self {
            wallet_id,
            name: name.into(),
            description: None,
            is_active: true,
            is_deposit: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn deposit(mut self) -> Self {
        self.is_deposit = true;
        self
    }
}

/// Partial update of an entity. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub is_active: Option<bool>,
    pub is_deposit: Option<bool>,
}

impl EntityChanges {
    pub fn apply(self, entity: &mut Entity) {
        if let Some(name) = self.name {
            entity.name = name;
        }
        if let Some(description) = self.description {
            entity.description = description;
        }
        if let Some(is_active) = self.is_active {
            entity.is_active = is_active;
        }
        if let Some(is_deposit) = self.is_deposit {
            entity.is_deposit = is_deposit;
        }
        entity.updated_at = Utc::now();
    }
}

/// List filters. Every set field must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityFilter {
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    pub is_active: Option<bool>,
    pub is_deposit: Option<bool>,
}

impl EntityFilter {
    pub fn matches(&self, entity: &Entity) -> bool {
        if let Some(name) = &self.name {
            if !entity.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(is_active) = self.is_active {
            if entity.is_active != is_active {
                return false;
            }
        }
        if let Some(is_deposit) = self.is_deposit {
            if entity.is_deposit != is_deposit {
                return false;
            }
        }
        true
    }
}

/// Field entities can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityOrderingField {
    Id,
    Name,
    IsDeposit,
}

impl EntityOrderingField {
    fn parse(field: &str) -> Option<Self> {
        match field {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "is_deposit" => Some(Self::IsDeposit),
            _ => None,
        }
    }

    /// Column name used by SQL backends
    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::IsDeposit => "is_deposit",
        }
    }
}

/// Ordering of an entity listing: a sequence of `(field, descending)` keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityOrdering {
    keys: Vec<(EntityOrderingField, bool)>,
}

impl Default for EntityOrdering {
    fn default() -> Self {
        Self {
            keys: vec![(EntityOrderingField::Id, false)],
        }
    }
}

impl EntityOrdering {
    /// Parses an `ordering` query value such as `-is_deposit,name`.
    ///
    /// Unknown fields are ignored. When nothing usable remains the default
    /// ordering by ascending id is returned.
    pub fn parse(raw: &str) -> Self {
        let keys: Vec<_> = raw
            .split(',')
            .map(str::trim)
            .filter_map(|term| {
                let (descending, field) = match term.strip_prefix('-') {
                    Some(field) => (true, field),
                    None => (false, term),
                };
                EntityOrderingField::parse(field).map(|field| (field, descending))
            })
            .collect();

        if keys.is_empty() {
            Self::default()
        } else {
            Self { keys }
        }
    }

    pub fn keys(&self) -> &[(EntityOrderingField, bool)] {
        &self.keys
    }

    /// Compares two entities. Ties fall back to ascending id so results are stable.
    pub fn compare(&self, a: &Entity, b: &Entity) -> std::cmp::Ordering {
        for (field, descending) in &self.keys {
            let ordering = match field {
                EntityOrderingField::Id => a.id.cmp(&b.id),
                EntityOrderingField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
                EntityOrderingField::IsDeposit => a.is_deposit.cmp(&b.is_deposit),
            };
            let ordering = if *descending { ordering.reverse() } else { ordering };
            if ordering.is_ne() {
                return ordering;
            }
        }
        a.id.cmp(&b.id)
    }

    /// Sorts `entities` in place
    pub fn sort(&self, entities: &mut [Entity]) {
        entities.sort_by(|a, b| self.compare(a, b));
    }
}
