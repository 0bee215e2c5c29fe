//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management
//! - Repository implementations
//! - Embedded schema migrations

pub mod connection;
pub mod mysql;


use budgetory_core::errors::DomainError;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStats, MIGRATOR};
pub use mysql::{
    MySqlCurrencyRepository, MySqlEntityRepository, MySqlTokenRepository, MySqlUserRepository,
    MySqlWalletRepository,
};

/// Map a driver error into the domain's opaque internal error
pub(crate) fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!(error = %e, "{}", context);
        DomainError::internal(format!("{}: {}", context, e))
    }
}

/// Whether `e` is a unique-key violation
pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}
