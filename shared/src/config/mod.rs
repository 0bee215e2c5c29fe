//! Typed configuration. Each section deserializes with defaults for any
//! missing key, so partial files and environment overrides are enough.

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, DemoConfig, JwtConfig};
pub use database::{DatabaseConfig, PoolConfig, StorageBackend};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Production gets an empty CORS allow-list and JSON logs
    pub fn for_environment(environment: Environment) -> Self {
        let cors = if environment.is_production() {
            CorsConfig::default()
        } else {
            CorsConfig::development()
        };

        Self {
            environment,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            cors,
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Settings worth a warning at start-up
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.auth.jwt.is_using_default_secret() {
            warnings.push("JWT secret is the built-in default".to_string());
        }
        if self.auth.superuser_api_key.is_none() {
            warnings.push("SUPERUSER_API_KEY is not set; superuser registration is disabled".to_string());
        }
        if self.environment.is_production() && self.database.backend == StorageBackend::Memory {
            warnings.push("in-memory storage selected in production".to_string());
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_defaults_are_not_permissive() {
        let config = AppConfig::for_environment(Environment::Production);
        assert!(config.cors.allowed_origins.is_empty());
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_default_config_warns_about_secrets() {
        let warnings = AppConfig::default().warnings();
        assert!(warnings.iter().any(|w| w.contains("JWT secret")));
        assert!(warnings.iter().any(|w| w.contains("SUPERUSER_API_KEY")));
    }

    #[test]
    fn test_empty_document_is_default() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.server.port, 8000);
        assert_eq!(parsed.database.backend, StorageBackend::Mysql);
        assert_eq!(parsed.auth.jwt.issuer, "budgetory");
    }
}
