//! Business services containing domain logic and use cases.

pub mod auth;
pub mod demo;
pub mod entity;
pub mod token;
pub mod wallet;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use demo::{DemoLoginService, DemoServiceConfig};
pub use entity::EntityService;
pub use token::{TokenService, TokenServiceConfig};
pub use wallet::WalletService;
