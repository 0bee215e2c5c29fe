//! Shared utilities and common types for the Budgetory server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The wire format of error responses
//! - Utility functions (e-mail validation and normalization)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, DemoConfig, Environment, JwtConfig,
    LogFormat, LoggingConfig, PoolConfig, ServerConfig, StorageBackend,
};
pub use types::response::ErrorResponse;
pub use utils::validation;
