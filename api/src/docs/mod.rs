//! API documentation metadata.
//!
//! Views describe the actions they implement with a [`ViewDoc`]. The
//! [`swagger_tag`] decorator attaches a tag (and optional per-action summary
//! and description) to every implemented action, and [`ApiDocs`] renders the
//! collected views as an OpenAPI 3 document.

mod action;
mod openapi;
mod view;

pub use action::{Action, ParseActionError, ACTIONS};
pub use openapi::ApiDocs;
pub use view::{swagger_tag, Operation, OperationParams, ViewDoc};
