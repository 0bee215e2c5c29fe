use serde::{Deserialize, Serialize};

use budgetory_core::domain::entities::entity::{Entity, EntityFilter, EntityOrdering};
use budgetory_core::FieldErrors;

/// Entity as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityResponse {
    pub id: i64,
    /// Owning wallet primary key
    pub wallet: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub is_deposit: bool,
}

impl From<Entity> for EntityResponse {
    fn from(entity: Entity) -> Self {
        Self {
            id: entity.id,
            wallet: entity.wallet_id,
            name: entity.name,
            description: entity.description,
            is_active: entity.is_active,
            is_deposit: entity.is_deposit,
        }
    }
}

/// Query string of the entity list. Booleans are kept raw so that an invalid
/// value can be reported against its field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntityListQuery {
    pub name: Option<String>,
    pub is_active: Option<String>,
    pub is_deposit: Option<String>,
    pub ordering: Option<String>,
}

impl EntityListQuery {
    pub fn into_parts(self) -> Result<(EntityFilter, EntityOrdering), FieldErrors> {
        let mut errors = FieldErrors::new();
        let is_active = parse_bool(&mut errors, "is_active", self.is_active.as_deref());
        let is_deposit = parse_bool(&mut errors, "is_deposit", self.is_deposit.as_deref());
        errors.into_result()?;

        let filter = EntityFilter {
            name: self.name.filter(|name| !name.is_empty()),
            is_active,
            is_deposit,
        };
        let ordering = self
            .ordering
            .as_deref()
            .map(EntityOrdering::parse)
            .unwrap_or_default();

        Ok((filter, ordering))
    }
}

fn parse_bool(errors: &mut FieldErrors, field: &str, raw: Option<&str>) -> Option<bool> {
    match raw? {
        "" => None,
        "true" | "True" | "1" => Some(true),
        "false" | "False" | "0" => Some(false),
        other => {
            errors.add(
                field,
                format!("Select a valid choice. {} is not one of the available choices.", other),
            );
            None
        }
    }
}
