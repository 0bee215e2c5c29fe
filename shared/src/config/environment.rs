//! Deployment environment and logging settings

use serde::{Deserialize, Serialize};

/// Variables consulted, in order, to pick the environment
const ENVIRONMENT_VARIABLES: [&str; 2] = ["BUDGETORY_ENV", "ENVIRONMENT"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }

    pub fn name(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// Environment named by the process environment; unknown values fall back
    /// to development.
    pub fn from_env() -> Self {
        Self::detect(|name| std::env::var(name).ok())
    }

    pub fn detect<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        ENVIRONMENT_VARIABLES
            .iter()
            .find_map(|name| lookup(name))
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Base name of the optional settings file; `config.production` matches
    /// `config.production.toml`
    pub fn config_file(&self) -> String {
        format!("config.{}", self.name())
    }

    /// Optional dotenv file, e.g. `.env.production`
    pub fn env_file(&self) -> String {
        format!(".env.{}", self.name())
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Environment::Development),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("Unknown environment '{}'", other)),
        }
    }
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive such as `info` or `budgetory_api=debug,sqlx=warn`.
    /// `RUST_LOG` wins over it.
    pub level: String,

    pub format: LogFormat,

    /// ANSI colours for the pretty and compact formats
    pub colored: bool,

    /// Attach file and line to each event
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl LoggingConfig {
    pub fn for_environment(environment: Environment) -> Self {
        let local = environment == Environment::Development;
        Self {
            level: if environment.is_production() {
                "info,sqlx=warn".to_string()
            } else if local {
                "debug,sqlx=info".to_string()
            } else {
                "info".to_string()
            },
            format: if local { LogFormat::Pretty } else { LogFormat::Json },
            colored: local,
            source_location: local,
        }
    }
}
