//! Authentication service module
//!
//! - Regular and superuser registration
//! - E-mail and password login
//! - Refresh token rotation

mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::{hash_password, verify_password};
pub use service::AuthService;
