//! MySQL pool and embedded migrations

use std::str::FromStr;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{ConnectOptions, MySqlPool};
use tracing::log::LevelFilter;

use budgetory_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Schema migrations from `infra/migrations`, compiled into the binary
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Shared sqlx pool. Cloning is cheap; every clone uses the same connections.
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Open the pool and verify one connection.
    ///
    /// ```no_run
    /// # async fn open() -> Result<(), budgetory_infra::InfrastructureError> {
    /// use budgetory_infra::database::DatabasePool;
    /// use budgetory_shared::config::DatabaseConfig;
    ///
    /// let pool = DatabasePool::connect(&DatabaseConfig::new("mysql://localhost/budgetory")).await?;
    /// pool.run_migrations().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        let limits = &config.pool;
        let options = MySqlConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(
                LevelFilter::Warn,
                Duration::from_millis(limits.slow_statement_ms),
            );

        let pool = MySqlPoolOptions::new()
            .max_connections(limits.max_connections)
            .min_connections(limits.min_connections)
            .acquire_timeout(Duration::from_secs(limits.acquire_timeout))
            .idle_timeout(Duration::from_secs(limits.idle_timeout))
            .max_lifetime(Duration::from_secs(limits.max_lifetime))
            .connect_with(options)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Could not open database pool");
                InfrastructureError::Database(e)
            })?;

        tracing::info!(max_connections = limits.max_connections, "Database pool open");
        Ok(Self { pool })
    }

    pub fn inner(&self) -> &MySqlPool {
        &self.pool
    }

    /// Round-trip a trivial query
    pub async fn ping(&self) -> Result<(), InfrastructureError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            size: self.pool.size(),
            idle: self.pool.num_idle(),
            max: self.pool.options().get_max_connections(),
        }
    }

    pub async fn run_migrations(&self) -> Result<(), InfrastructureError> {
        MIGRATOR.run(&self.pool).await?;
        tracing::info!(applied = MIGRATOR.iter().count(), "Schema is up to date");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    pub size: u32,
    pub idle: usize,
    pub max: u32,
}

impl std::fmt::Display for PoolStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {} connections open, {} idle", self.size, self.max, self.idle)
    }
}
