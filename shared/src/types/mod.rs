//! Common type definitions shared across the server crates

pub mod response;

pub use response::ErrorResponse;
