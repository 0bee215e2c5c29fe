//! Value objects: validated input forms and the views returned for them.

pub mod entity_form;
pub mod registration;
pub mod wallet_form;


pub use entity_form::EntityForm;
pub use registration::{RegisteredUser, RegistrationForm, PASSWORD_MISMATCH_MESSAGE};
pub use wallet_form::WalletForm;

/// Message for a missing mandatory field
pub const REQUIRED_MESSAGE: &str = "This field is required.";
