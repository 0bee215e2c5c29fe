//! Route handlers, grouped by resource.
//!
//! Every view module exposes a `view_doc()` describing its operations for
//! the generated API documentation.

pub mod currencies;
pub mod docs;
pub mod entities;
pub mod health;
pub mod users;
pub mod wallets;

pub use docs::api_docs;
