//! HSG relay - chat relay for an LLM completion API
//!
//! This library provides the core functionality for the relay server. It
//! accepts a chat message plus caller-held history, sends it upstream behind a
//! fixed persona prompt, and returns the model's reply or a fixed error.

pub mod config;
pub mod error;
pub mod proxy;
pub mod relay;
pub mod routes;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{RelayError, RelayResult};
pub use crate::proxy::{CompletionProvider, OpenRouterProvider};
pub use crate::relay::Relay;

/// Application state shared across all request handlers
///
/// Read-only after startup: no request mutates it.
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Relay wired to the configured completion provider
    pub relay: Relay,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // Initialize HTTP client with connection pooling; the per-call
        // timeout is applied by the provider
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(32)
            .build()?;

        let provider: Arc<dyn CompletionProvider> =
            Arc::new(OpenRouterProvider::new(http_client, &config)?);

        Ok(Self {
            config,
            start_time: Instant::now(),
            relay: Relay::new(provider),
        })
    }

    /// Create a new application state around an arbitrary provider
    ///
    /// Used by integration tests to point the relay at a mock server or to
    /// shorten the upstream timeout.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn new_for_testing(config: Config, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            relay: Relay::new(provider),
        }
    }
}
