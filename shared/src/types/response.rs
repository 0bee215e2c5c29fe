//! Error response body returned by every endpoint
//!
//! Most failures use `{"detail": ...}` where `detail` is either a message or a
//! map of field name to messages. Token failures add a machine readable
//! `code`. Demo login failures use `{"error": ...}`, which is what the
//! front-end reads for that endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Message or field errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,

    /// Machine readable error code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Top-level error message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// `{"detail": "<message>"}`
    pub fn detail(message: impl Into<String>) -> Self {
        Self {
            detail: Some(Value::String(message.into())),
            code: None,
            error: None,
        }
    }

    /// `{"detail": {<field>: [<message>, ...]}}`
    pub fn fields<T: Serialize>(fields: &T) -> Self {
        Self {
            detail: Some(serde_json::to_value(fields).unwrap_or(Value::Null)),
            code: None,
            error: None,
        }
    }

    /// `{"error": "<message>"}`
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            detail: None,
            code: None,
            error: Some(message.into()),
        }
    }

    /// Attach an error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// The detail message, if the detail is a plain string
    pub fn detail_message(&self) -> Option<&str> {
        self.detail.as_ref().and_then(Value::as_str)
    }
}
