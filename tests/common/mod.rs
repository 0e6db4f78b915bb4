//! Common test utilities for the HSG relay
//!
//! Provides the test harness that wires the real router to a mock upstream.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use hsg_relay::{routes, AppState, CompletionProvider, Config, OpenRouterProvider};
use secrecy::SecretString;

use crate::mocks::MockOpenRouter;

/// Test configuration constants
pub mod constants {
    /// API key the relay is configured with
    pub const TEST_API_KEY: &str = "sk-or-test-key";
    /// Referer tag sent upstream
    pub const TEST_REFERER: &str = "http://localhost:5000";
    /// Title tag sent upstream
    pub const TEST_TITLE: &str = "HSG AI Chat";
}

/// Build a config pointing at the given upstream base URL
pub fn test_config(upstream_url: &str) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0, // Let OS assign port
        upstream_url: upstream_url.to_string(),
        api_key: SecretString::from(constants::TEST_API_KEY),
        referer: constants::TEST_REFERER.to_string(),
        title: constants::TEST_TITLE.to_string(),
    }
}

/// Test harness for blackbox relay tests
///
/// Creates:
/// - Mock OpenRouter server (wiremock)
/// - Real OpenRouter provider pointed at the mock
/// - Real app router with all layers
///
/// # Example
///
/// ```ignore
/// let harness = RelayTestHarness::new().await;
/// harness.upstream.mock_completion_success("Hello").await;
///
/// let response = harness.server
///     .post("/chat")
///     .json(&json!({ "message": "Hi" }))
///     .await;
///
/// response.assert_status_ok();
/// ```
pub struct RelayTestHarness {
    pub server: TestServer,
    pub upstream: MockOpenRouter,
}

impl RelayTestHarness {
    /// Create a harness with the production upstream timeout
    pub async fn new() -> Self {
        Self::build(None).await
    }

    /// Create a harness whose upstream timeout is `timeout`
    pub async fn with_timeout(timeout: Duration) -> Self {
        Self::build(Some(timeout)).await
    }

    /// Create a harness whose provider targets `upstream_url` instead of the mock
    ///
    /// The mock is still started so tests can assert it received nothing.
    pub async fn with_upstream_url(upstream_url: &str) -> Self {
        let upstream = MockOpenRouter::start().await;
        Self::build_with(upstream, upstream_url.to_string(), None)
    }

    async fn build(timeout: Option<Duration>) -> Self {
        let upstream = MockOpenRouter::start().await;
        let upstream_url = upstream.base_url();
        Self::build_with(upstream, upstream_url, timeout)
    }

    fn build_with(upstream: MockOpenRouter, upstream_url: String, timeout: Option<Duration>) -> Self {
        let config = test_config(&upstream_url);

        let mut provider = OpenRouterProvider::new(reqwest::Client::new(), &config)
            .expect("Failed to create provider");
        if let Some(timeout) = timeout {
            provider = provider.with_timeout(timeout);
        }
        let provider: Arc<dyn CompletionProvider> = Arc::new(provider);

        let state = Arc::new(AppState::new_for_testing(config, provider));
        let app = routes::create_router(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, upstream }
    }
}
