//! Error types for the HSG relay
//!
//! Every failure the relay can report is one variant of [`RelayError`]. Each
//! variant maps to a fixed status code and a fixed user-facing message, so
//! callers never see upstream error bodies or internal details.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::relay::ChatReply;

/// Message returned when the inbound request has no usable `message`
pub const NO_MESSAGE_PROVIDED: &str = "No message provided";
/// Reply returned when the upstream call times out
pub const REPLY_TIMEOUT: &str = "Request timed out. Please try again.";
/// Reply returned when the upstream rejects the credential
pub const REPLY_AUTH_FAILED: &str = "Authorization failed. Please check your API key.";
/// Reply returned when the upstream rejects the request payload
pub const REPLY_INVALID_REQUEST: &str = "Invalid request format. Please try again.";
/// Reply returned for unexpected upstream statuses and internal failures
pub const REPLY_GENERIC_FAILURE: &str = "Something went wrong. Please try again later.";
/// Reply returned when a successful upstream response cannot be used
pub const REPLY_INVALID_RESPONSE: &str = "Invalid response from AI service. Please try again.";

/// Relay-level errors
#[derive(Debug, Error)]
pub enum RelayError {
    /// The caller sent no message (or an empty one)
    #[error("No message provided")]
    ClientInput,

    /// The upstream rejected our credential (401)
    #[error("Upstream rejected the API key")]
    UpstreamAuth,

    /// The upstream rejected the request payload (400)
    #[error("Upstream rejected the request payload")]
    UpstreamRequest,

    /// The upstream answered with any other non-200 status
    #[error("Upstream returned unexpected status {status}")]
    UpstreamUnavailable { status: u16 },

    /// The upstream did not answer within the request timeout
    #[error("Upstream request timed out")]
    UpstreamTimeout,

    /// The upstream answered 200 but the body was unusable
    #[error("Malformed upstream response: {0}")]
    UpstreamMalformedResponse(String),

    /// Anything else: transport failures, unreadable inbound bodies
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RelayError {
    /// Status code reported to the caller
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::ClientInput => StatusCode::BAD_REQUEST,
            RelayError::UpstreamAuth => StatusCode::UNAUTHORIZED,
            RelayError::UpstreamRequest => StatusCode::BAD_REQUEST,
            RelayError::UpstreamUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            RelayError::UpstreamMalformedResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed message shown to the caller
    pub fn user_message(&self) -> &'static str {
        match self {
            RelayError::ClientInput => NO_MESSAGE_PROVIDED,
            RelayError::UpstreamAuth => REPLY_AUTH_FAILED,
            RelayError::UpstreamRequest => REPLY_INVALID_REQUEST,
            RelayError::UpstreamUnavailable { .. } => REPLY_GENERIC_FAILURE,
            RelayError::UpstreamTimeout => REPLY_TIMEOUT,
            RelayError::UpstreamMalformedResponse(_) => REPLY_INVALID_RESPONSE,
            RelayError::Internal(_) => REPLY_GENERIC_FAILURE,
        }
    }

    /// Short label used for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::ClientInput => "client_input",
            RelayError::UpstreamAuth => "upstream_auth",
            RelayError::UpstreamRequest => "upstream_request",
            RelayError::UpstreamUnavailable { .. } => "upstream_unavailable",
            RelayError::UpstreamTimeout => "upstream_timeout",
            RelayError::UpstreamMalformedResponse(_) => "upstream_malformed",
            RelayError::Internal(_) => "internal",
        }
    }
}

/// Error body for rejected client input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            RelayError::ClientInput => (
                status,
                Json(ErrorResponse {
                    error: NO_MESSAGE_PROVIDED.to_string(),
                }),
            )
                .into_response(),
            other => (status, Json(ChatReply::new(other.user_message()))).into_response(),
        }
    }
}

/// Result type alias for convenience
pub type RelayResult<T> = Result<T, RelayError>;
