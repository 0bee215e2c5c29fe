//! Middleware and request guards

pub mod api_key;
pub mod auth;
pub mod cors;

pub use api_key::{ApiKeyGuard, SuperuserApiKey};
pub use auth::{AccessTokenVerifier, AuthContext, JwtAuth};
pub use cors::create_cors;
