//! Configuration loading.
//!
//! Layers, lowest priority first:
//! 1. built-in defaults for the current environment,
//! 2. an optional `config.<environment>.toml`,
//! 3. `BUDGETORY__SECTION__KEY` environment variables,
//! 4. the conventional variables `DATABASE_URL`, `STORAGE`, `JWT_SECRET`,
//!    `SUPERUSER_API_KEY`, `SERVER_HOST` and `SERVER_PORT`.
//!
//! `.env` files are read first, so they feed every environment layer.

use std::env;

use anyhow::Context;
use ::config::{Config, File};

use budgetory_shared::{AppConfig, Environment};

/// Load the application configuration
pub fn load() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();
    let environment = Environment::from_env();
    dotenvy::from_filename(environment.env_file()).ok();

    let defaults = AppConfig::for_environment(environment);

    let mut loaded: AppConfig = Config::builder()
        .add_source(Config::try_from(&defaults).context("Failed to serialize default configuration")?)
        .add_source(File::with_name(&environment.config_file()).required(false))
        .add_source(
            ::config::Environment::with_prefix("BUDGETORY")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to read configuration")?
        .try_deserialize()
        .context("Invalid configuration")?;

    apply_overrides(&mut loaded, |name| env::var(name).ok())?;
    Ok(loaded)
}

/// Apply the conventional environment variables, read through `lookup`
pub fn apply_overrides<F>(config: &mut AppConfig, lookup: F) -> anyhow::Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DATABASE_URL") {
        config.database.url = url;
    }
    if let Some(storage) = lookup("STORAGE") {
        config.database.backend = storage
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))
            .context("Invalid STORAGE")?;
    }
    if let Some(secret) = lookup("JWT_SECRET") {
        config.auth.jwt.secret = secret;
    }
    if let Some(key) = lookup("SUPERUSER_API_KEY") {
        config.auth.superuser_api_key = Some(key).filter(|key| !key.is_empty());
    }
    if let Some(host) = lookup("SERVER_HOST") {
        config.server.host = host;
    }
    if let Some(port) = lookup("SERVER_PORT") {
        config.server.port = port.parse().context("SERVER_PORT must be a valid port number")?;
    }
    Ok(())
}
