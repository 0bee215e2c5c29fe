//! Input form for entity create and update.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::entity::{EntityChanges, NewEntity};
use crate::errors::FieldErrors;

use super::REQUIRED_MESSAGE;

/// Entity payload. Any `wallet` key in the body is ignored: the owning wallet
/// always comes from the request path.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EntityForm {
    #[validate(length(max = 128, message = "Ensure this field has no more than 128 characters."))]
    pub name: Option<String>,

    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub description: Option<String>,

    pub is_active: Option<bool>,

    pub is_deposit: Option<bool>,
}

impl EntityForm {
    /// Validate the form. `partial` skips the presence check on `name`.
    pub fn field_errors(&self, partial: bool) -> FieldErrors {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => FieldErrors::from(errors),
        };

        match self.name.as_deref().map(str::trim) {
            None if !partial => errors.add("name", REQUIRED_MESSAGE),
            Some("") => errors.add("name", "This field may not be blank."),
            _ => {}
        }

        errors
    }

    /// Record to insert into `wallet_id`. Absent flags take their defaults.
    pub fn into_new_entity(self, wallet_id: i64) -> NewEntity {
        NewEntity {
            wallet_id,
            name: self.name.unwrap_or_default().trim().to_string(),
            description: self.description,
            is_active: self.is_active.unwrap_or(true),
            is_deposit: self.is_deposit.unwrap_or(false),
        }
    }

    /// Changes for a full (`partial == false`) or partial update.
    ///
    /// A full update resets omitted optional fields to their defaults.
    pub fn into_changes(self, partial: bool) -> EntityChanges {
        let name = self.name.map(|name| name.trim().to_string());
        if partial {
            EntityChanges {
                name,
                description: self.description.map(Some),
                is_active: self.is_active,
                is_deposit: self.is_deposit,
            }
        } else {
            EntityChanges {
                name,
                description: Some(self.description),
                is_active: Some(self.is_active.unwrap_or(true)),
                is_deposit: Some(self.is_deposit.unwrap_or(false)),
            }
        }
    }
}
