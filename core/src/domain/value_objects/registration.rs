//! Registration form shared by regular and superuser sign-up.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use budgetory_shared::utils::validation::{is_valid_email, normalize_email};

use crate::domain::entities::user::User;
use crate::errors::FieldErrors;

/// Object-level error raised when both passwords are valid but differ
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Provided passwords are not the same.";

const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email address.";

/// Registration payload. Every field is optional at the type level so that a
/// missing field is reported as a validation error rather than a parse error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegistrationForm {
    #[validate(required(message = "This field is required."))]
    pub email: Option<String>,

    #[validate(length(max = 150, message = "Ensure this field has no more than 150 characters."))]
    pub username: Option<String>,

    #[validate(required(message = "This field is required."))]
    pub password_1: Option<String>,

    #[validate(required(message = "This field is required."))]
    pub password_2: Option<String>,
}

impl RegistrationForm {
    pub fn new(email: &str, password_1: &str, password_2: &str) -> Self {
        Self {
            email: Some(email.to_string()),
            username: None,
            password_1: Some(password_1.to_string()),
            password_2: Some(password_2.to_string()),
        }
    }

    pub fn with_username(mut self, username: &str) -> Self {
        self.username = Some(username.to_string());
        self
    }

    /// Field-level checks that need no storage access.
    ///
    /// Covers presence, e-mail syntax, username length and the minimum
    /// password length, reported on each password field separately.
    pub fn field_errors(&self, min_password_length: usize) -> FieldErrors {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => FieldErrors::from(errors),
        };

        if let Some(email) = &self.email {
            if !is_valid_email(email.trim()) {
                errors.add("email", INVALID_EMAIL_MESSAGE);
            }
        }

        for (field, value) in [("password_1", &self.password_1), ("password_2", &self.password_2)] {
            if let Some(password) = value {
                if password.chars().count() < min_password_length {
                    errors.add(
                        field,
                        format!("Ensure this field has at least {} characters.", min_password_length),
                    );
                }
            }
        }

        errors
    }

    /// E-mail in its stored form, if present
    pub fn normalized_email(&self) -> Option<String> {
        self.email.as_deref().map(normalize_email)
    }

    /// Object-level check, run only once every field is valid
    pub fn passwords_match(&self) -> bool {
        self.password_1 == self.password_2
    }
}

/// Public view of a freshly registered user. Never carries password data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub email: String,
    pub username: Option<String>,
}

impl From<&User> for RegisteredUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
        }
    }
}
