//! MySQL persistence for Budgetory: sqlx implementations of the repository
//! traits from `budgetory_core`, the pool wrapper and embedded migrations.
//!
//! Everything database related sits behind the default `mysql` feature.

#[cfg(feature = "mysql")]
pub mod database;

/// Start-up failures. Request-time failures surface as `DomainError` instead.
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("invalid database configuration: {0}")]
    Config(String),
}
