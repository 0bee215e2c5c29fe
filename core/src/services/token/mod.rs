//! Token service module for JWT management
//!
//! - HS256 access token generation and verification
//! - Opaque refresh tokens, stored hashed and rotated on use
//! - Background cleanup of expired refresh tokens

mod cleanup;
mod config;
mod service;

#[cfg(test)]
mod tests;

pub use cleanup::{TokenCleanupConfig, TokenCleanupService};
pub use config::TokenServiceConfig;
pub use service::{hash_token, TokenService, REFRESH_TOKEN_LENGTH};
