//! Superuser registration guard.
//!
//! The `Authorization` header must equal `KEY <configured key>` exactly. The
//! comparison runs in constant time. Without a configured key every request
//! is rejected.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, FromRequest, HttpRequest};
use constant_time_eq::constant_time_eq;

use budgetory_core::errors::AuthError;

use crate::handlers::error::ApiError;

const KEY_PREFIX: &str = "KEY ";

/// Configured superuser API key, registered as app data
#[derive(Debug, Clone, Default)]
pub struct ApiKeyGuard {
    expected: Option<String>,
}

impl ApiKeyGuard {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            expected: api_key.filter(|key| !key.is_empty()),
        }
    }

    /// Check a raw `Authorization` header value
    pub fn verify(&self, header: Option<&str>) -> Result<(), AuthError> {
        let (Some(expected), Some(header)) = (self.expected.as_deref(), header) else {
            return Err(AuthError::InvalidApiKey);
        };

        let presented = header.strip_prefix(KEY_PREFIX).unwrap_or_default();
        if !presented.is_empty() && constant_time_eq(presented.as_bytes(), expected.as_bytes()) {
            Ok(())
        } else {
            Err(AuthError::InvalidApiKey)
        }
    }
}

/// Extractor that only succeeds for requests carrying the superuser API key.
///
/// Put it before the body extractor so a missing key is reported before the
/// payload is parsed.
#[derive(Debug, Clone, Copy)]
pub struct SuperuserApiKey;

impl FromRequest for SuperuserApiKey {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let result = match req.app_data::<web::Data<ApiKeyGuard>>() {
            Some(guard) => guard.verify(header),
            None => Err(AuthError::InvalidApiKey),
        };

        ready(result.map(|_| SuperuserApiKey).map_err(|e| {
            tracing::warn!("Superuser registration rejected: invalid or missing API key");
            ApiError::from(e)
        }))
    }
}
