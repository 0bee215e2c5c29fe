//! Token signing, superuser key, password policy and demo accounts

use serde::{Deserialize, Serialize};

/// Placeholder secret; start-up warns while it is in use
const INSECURE_JWT_SECRET: &str = "budgetory-insecure-development-secret";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct JwtConfig {
    /// HS256 signing secret
    pub secret: String,
    /// Access token lifetime in seconds
    pub access_token_ttl: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_ttl: i64,
    pub issuer: String,
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: INSECURE_JWT_SECRET.to_string(),
            access_token_ttl: 15 * 60,
            refresh_token_ttl: 7 * 24 * 60 * 60,
            issuer: "budgetory".to_string(),
            audience: "budgetory-api".to_string(),
        }
    }
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Self::default()
        }
    }

    pub fn is_using_default_secret(&self) -> bool {
        self.secret == INSECURE_JWT_SECRET
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DemoConfig {
    /// When false, `POST /api/users/demo-login/` always fails
    pub enabled: bool,
    /// Currency code of the generated demo wallet
    pub currency: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            currency: "PLN".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt: JwtConfig,

    /// Expected in `Authorization: KEY <value>` on superuser registration.
    /// `None` rejects every attempt.
    pub superuser_api_key: Option<String>,

    pub bcrypt_cost: u32,

    pub min_password_length: usize,

    pub demo: DemoConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            superuser_api_key: None,
            bcrypt_cost: 12,
            min_password_length: 8,
            demo: DemoConfig::default(),
        }
    }
}
