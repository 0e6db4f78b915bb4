//! OpenRouter completion provider
//!
//! Sends one non-streaming request to the OpenAI-compatible
//! `chat/completions` endpoint and hands the raw answer back to the relay.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::{
    config::Config,
    proxy::{
        headers::build_default_headers,
        logging::RequestContext,
        provider::{CompletionProvider, TransportError, UpstreamResponse},
    },
    relay::CompletionRequest,
};

/// Hard timeout for one upstream call, covering connect, send and body read
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the OpenRouter chat completions API
pub struct OpenRouterProvider {
    client: reqwest::Client,
    url: String,
    headers: HeaderMap,
    timeout: Duration,
}

impl OpenRouterProvider {
    /// Create a new provider from configuration
    ///
    /// Fails if the configured credential, referer or title cannot be
    /// encoded as header values.
    pub fn new(client: reqwest::Client, config: &Config) -> Result<Self> {
        let headers = build_default_headers(&config.api_key, &config.referer, &config.title)
            .context("Configured API key, referer or title is not a valid header value")?;

        Ok(Self {
            client,
            url: config.completions_url(),
            headers,
            timeout: UPSTREAM_TIMEOUT,
        })
    }

    /// Override the upstream timeout so timeout handling can be tested quickly
    #[cfg(any(test, feature = "test-utils"))]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Target URL of the completion call
    pub fn url(&self) -> &str {
        &self.url
    }

    fn report(&self, ctx: &RequestContext, err: TransportError) -> TransportError {
        match &err {
            TransportError::Timeout => ctx.log_timeout(self.timeout.as_millis() as u64),
            TransportError::Connect(message) => ctx.log_connection_error(message, &self.url),
            TransportError::Other(message) => ctx.log_error(message),
        }
        err
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterProvider {
    fn name(&self) -> &'static str {
        "openrouter"
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
        ctx: &RequestContext,
    ) -> Result<UpstreamResponse, TransportError> {
        let payload = serde_json::to_vec(request)
            .map_err(|e| TransportError::Other(format!("Failed to serialize request: {}", e)))?;

        ctx.log_upstream_request(&self.url, &self.headers, &String::from_utf8_lossy(&payload));

        let response = self
            .client
            .post(&self.url)
            .headers(self.headers.clone())
            .timeout(self.timeout)
            .body(payload)
            .send()
            .await
            .map_err(|e| self.report(ctx, e.into()))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| self.report(ctx, e.into()))?;

        ctx.log_upstream_response(status.as_u16(), &headers, &String::from_utf8_lossy(&body));

        Ok(UpstreamResponse {
            status,
            headers,
            body,
        })
    }
}
