//! # Budgetory API
//!
//! actix-web application of the Budgetory backend: routes, request and
//! response bodies, middleware, error mapping and the generated API
//! documentation.

pub mod app;
pub mod config;
pub mod docs;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use app::create_app;
pub use state::{AppState, MemoryStorage, Repositories, Storage};
