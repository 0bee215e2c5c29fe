//! Background sweep of expired refresh tokens.
//!
//! Rotation leaves one revoked row behind per refresh, and abandoned sessions
//! leave unrevoked ones; both are deleted once past `expires_at`.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::errors::DomainResult;
use crate::repositories::TokenRepository;

#[derive(Debug, Clone)]
pub struct TokenCleanupConfig {
    pub enabled: bool,
    pub interval: Duration,
}

impl Default for TokenCleanupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: Duration::from_secs(60 * 60),
        }
    }
}

pub struct TokenCleanupService<R: TokenRepository + 'static> {
    tokens: Arc<R>,
    config: TokenCleanupConfig,
}

impl<R: TokenRepository> TokenCleanupService<R> {
    pub fn new(tokens: Arc<R>, config: TokenCleanupConfig) -> Self {
        Self { tokens, config }
    }

    /// One sweep. Returns the number of deleted rows; 0 when disabled.
    pub async fn run_cleanup(&self) -> DomainResult<usize> {
        if !self.config.enabled {
            return Ok(0);
        }

        let deleted = self.tokens.delete_expired().await?;
        debug!(deleted, "Swept expired refresh tokens");
        Ok(deleted)
    }

    /// Sweep every `interval` for the life of the runtime
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            debug!("Refresh token sweep disabled");
            return;
        }

        tokio::spawn(async move {
            let mut ticks = tokio::time::interval(self.config.interval);
            loop {
                ticks.tick().await;
                if let Err(e) = self.run_cleanup().await {
                    warn!(error = %e, "Refresh token sweep failed");
                }
            }
        });
    }
}
