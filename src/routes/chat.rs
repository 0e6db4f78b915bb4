//! Chat endpoint
//!
//! `POST /chat` accepts `{ "message": ..., "history": [...] }` from the web
//! client and answers with `{ "reply": ... }`.

use std::sync::Arc;
use std::time::Instant;

use axum::{body::Bytes, extract::State, Json};
use tracing::warn;

use crate::{
    error::RelayError,
    relay::{ChatReply, ChatRequest},
    routes::metrics::record_request,
    AppState,
};

/// Handle chat requests
///
/// The body is decoded by hand rather than with the `Json` extractor so that
/// undecodable bodies get the relay's own error body instead of axum's
/// plain-text rejection.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ChatReply>, RelayError> {
    let start_time = Instant::now();

    let result = match serde_json::from_slice::<ChatRequest>(&body) {
        Ok(request) => state.relay.handle_chat(request).await,
        Err(e) => {
            warn!(error = %e, body_len = body.len(), "Invalid chat request body");
            Err(RelayError::Internal(format!("Invalid request body: {}", e)))
        }
    };

    let outcome = match &result {
        Ok(_) => "success",
        Err(err) => err.kind(),
    };
    record_request(outcome, start_time.elapsed().as_secs_f64());

    result.map(Json)
}
