use serde::{Deserialize, Serialize};
use validator::Validate;

use budgetory_core::domain::entities::token::TokenPair;
use budgetory_core::FieldErrors;

/// Request body of `POST /api/users/login/`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required(message = "This field is required."))]
    pub email: Option<String>,

    #[validate(required(message = "This field is required."))]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Check presence of both fields and return them
    pub fn credentials(self) -> Result<(String, String), FieldErrors> {
        self.validate().map_err(FieldErrors::from)?;
        match (self.email, self.password) {
            (Some(email), Some(password)) => Ok((email, password)),
            _ => Err(FieldErrors::new()),
        }
    }
}

/// Request body of `POST /api/users/token/refresh/`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RefreshRequest {
    #[validate(required(message = "This field is required."))]
    pub refresh: Option<String>,
}

impl RefreshRequest {
    pub fn token(self) -> Result<String, FieldErrors> {
        self.validate().map_err(FieldErrors::from)?;
        self.refresh.ok_or_else(FieldErrors::new)
    }
}

/// `{"access": ..., "refresh": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access: String,
    pub refresh: String,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access: pair.access,
            refresh: pair.refresh,
        }
    }
}
