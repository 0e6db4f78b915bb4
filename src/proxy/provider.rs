//! Completion provider abstraction
//!
//! Defines the seam between the relay and the upstream completion API so the
//! HTTP client can be pointed at a mock server in tests.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use thiserror::Error;

use crate::proxy::logging::RequestContext;
use crate::relay::CompletionRequest;

/// Raw upstream answer: the relay classifies it, the provider does not
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl UpstreamResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Body as text for logging; invalid UTF-8 is replaced
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Failures that happen before a complete upstream response is available
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("transport error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

/// Trait implemented by upstream completion backends
///
/// # Security
///
/// Implementations MUST:
/// - Send the credential from process configuration, never from the inbound request
/// - Redact the `Authorization` header from anything they log
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Perform one non-streaming completion call
    ///
    /// Any HTTP status is returned as `Ok`; only transport-level failures are
    /// `Err`. No retries are attempted.
    async fn complete(
        &self,
        request: &CompletionRequest,
        ctx: &RequestContext,
    ) -> Result<UpstreamResponse, TransportError>;
}
