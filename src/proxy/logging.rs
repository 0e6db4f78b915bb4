//! Request logging utilities for relayed chat calls
//!
//! Provides structured logging with correlation IDs so one chat call can be
//! followed from the inbound request through the upstream round trip.
//! Credentials never reach these functions in plaintext: headers are passed
//! through [`redact_headers`] first.

use std::time::Instant;

use reqwest::header::HeaderMap;
use tracing::{debug, error, info, warn, Span};
use uuid::Uuid;

use crate::proxy::headers::redact_headers;

/// Context for tracking a chat call through the system
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request (for log correlation)
    pub trace_id: String,
    /// When the request started
    pub start_time: Instant,
    /// Upstream provider handling this request
    pub provider: String,
    /// Model being requested
    pub model: Option<String>,
    /// Number of caller-supplied history turns
    pub history_len: usize,
}

impl RequestContext {
    /// Create a new request context
    pub fn new(provider: &str) -> Self {
        Self {
            trace_id: Uuid::new_v4().to_string()[..8].to_string(), // Short ID for readability
            start_time: Instant::now(),
            provider: provider.to_string(),
            model: None,
            history_len: 0,
        }
    }

    /// Set the model for this request
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the number of history turns
    pub fn with_history_len(mut self, history_len: usize) -> Self {
        self.history_len = history_len;
        self
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }

    /// Log request initiation
    pub fn log_request_start(&self) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            model = ?self.model,
            history_len = %self.history_len,
            "Chat request started"
        );
    }

    /// Log the outbound request; payload is logged at debug level only
    pub fn log_upstream_request(&self, url: &str, headers: &HeaderMap, payload: &str) {
        debug!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            url = %url,
            headers = ?redact_headers(headers),
            payload = %payload,
            elapsed_ms = %self.elapsed_ms(),
            "Sending request to upstream"
        );
    }

    /// Log response received from upstream
    pub fn log_upstream_response(&self, status: u16, headers: &HeaderMap, body: &str) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            status = %status,
            body_len = %body.len(),
            elapsed_ms = %self.elapsed_ms(),
            "Response received from upstream"
        );
        debug!(
            trace_id = %self.trace_id,
            headers = ?redact_headers(headers),
            body = %body,
            "Upstream response details"
        );
    }

    /// Log an upstream status or body the relay could not use
    pub fn log_upstream_rejection(&self, status: u16, body: &str, reason: &str) {
        warn!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            status = %status,
            body = %body,
            reason = %reason,
            elapsed_ms = %self.elapsed_ms(),
            "Upstream response rejected"
        );
    }

    /// Log successful request completion
    pub fn log_request_complete(&self, reply_len: usize) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            model = ?self.model,
            reply_len = %reply_len,
            elapsed_ms = %self.elapsed_ms(),
            "Chat request completed successfully"
        );
    }

    /// Log request failure
    pub fn log_error(&self, error: &str) {
        error!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            model = ?self.model,
            elapsed_ms = %self.elapsed_ms(),
            error = %error,
            "Chat request failed"
        );
    }

    /// Log connection error (specific for debugging connectivity issues)
    pub fn log_connection_error(&self, error: &str, url: &str) {
        error!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            url = %url,
            elapsed_ms = %self.elapsed_ms(),
            error = %error,
            "Connection to upstream failed"
        );
    }

    /// Log timeout
    pub fn log_timeout(&self, timeout_ms: u64) {
        error!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            timeout_ms = %timeout_ms,
            elapsed_ms = %self.elapsed_ms(),
            "Request timed out"
        );
    }

    /// Create a tracing span for this request
    pub fn create_span(&self) -> Span {
        tracing::info_span!(
            "chat_relay",
            trace_id = %self.trace_id,
            provider = %self.provider,
            model = ?self.model,
        )
    }
}
