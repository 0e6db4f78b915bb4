//! Upstream outcome classification
//!
//! Pure mapping from what the provider returned to either the reply text or
//! the [`RelayError`] the caller will see. Precedence: timeout, 401, 400, any
//! other non-200, unusable 200 body, then success. Transport failures other
//! than timeouts fall through to [`RelayError::Internal`].

use reqwest::StatusCode;

use crate::{
    error::{RelayError, RelayResult},
    proxy::{TransportError, UpstreamResponse},
    relay::types::CompletionResponse,
};

/// Classify one upstream outcome
pub fn classify(outcome: Result<&UpstreamResponse, &TransportError>) -> RelayResult<String> {
    let response = match outcome {
        Ok(response) => response,
        Err(TransportError::Timeout) => return Err(RelayError::UpstreamTimeout),
        Err(other) => return Err(RelayError::Internal(other.to_string())),
    };

    match response.status {
        StatusCode::OK => extract_reply(&response.body),
        StatusCode::UNAUTHORIZED => Err(RelayError::UpstreamAuth),
        StatusCode::BAD_REQUEST => Err(RelayError::UpstreamRequest),
        status => Err(RelayError::UpstreamUnavailable {
            status: status.as_u16(),
        }),
    }
}

/// Pull the first choice's message content out of a 200 response body
pub fn extract_reply(body: &[u8]) -> RelayResult<String> {
    let parsed: CompletionResponse = serde_json::from_slice(body).map_err(|e| {
        RelayError::UpstreamMalformedResponse(format!("Unparsable response body: {}", e))
    })?;

    let first = parsed.choices.into_iter().next().ok_or_else(|| {
        RelayError::UpstreamMalformedResponse("Response has no choices".to_string())
    })?;

    first.message.content.ok_or_else(|| {
        RelayError::UpstreamMalformedResponse("First choice has no message content".to_string())
    })
}
