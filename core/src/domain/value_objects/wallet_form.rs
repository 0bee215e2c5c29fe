//! Input form for wallet create and update.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::wallet::WalletChanges;
use crate::errors::FieldErrors;

use super::REQUIRED_MESSAGE;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct WalletForm {
    #[validate(length(max = 128, message = "Ensure this field has no more than 128 characters."))]
    pub name: Option<String>,

    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub description: Option<String>,

    /// Currency primary key
    pub currency: Option<i64>,
}

impl WalletForm {
    /// Validate the form. `partial` skips presence checks.
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
        if self.currency.is_none() && !partial {
            errors.add("currency", REQUIRED_MESSAGE);
        }

        errors
    }

    pub fn into_changes(self, partial: bool) -> WalletChanges {
        WalletChanges {
            name: self.name.map(|name| name.trim().to_string()),
            description: if partial {
                self.description.map(Some)
            } else {
                Some(self.description)
            },
            currency_id: self.currency,
        }
    }
}
