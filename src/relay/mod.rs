//! Chat relay
//!
//! Turns one inbound chat request into one upstream completion call and
//! normalizes the outcome. The fixed system turn is always sent first and is
//! never visible to or settable by the caller. Nothing is retained between
//! calls.

pub mod classify;
pub mod types;

use std::sync::Arc;

use tracing::{warn, Instrument};

use crate::{
    error::{RelayError, RelayResult},
    proxy::{CompletionProvider, RequestContext},
};

pub use classify::{classify, extract_reply};
pub use types::{
    ChatReply, ChatRequest, ChatTurn, CompletionChoice, CompletionMessage, CompletionRequest,
    CompletionResponse, Role,
};

/// Model requested for every completion
pub const MODEL: &str = "openai/gpt-3.5-turbo";
/// Sampling temperature
pub const TEMPERATURE: f64 = 0.7;
/// Upper bound on generated tokens
pub const MAX_TOKENS: u32 = 1000;

/// Persona instructions sent as the first message of every conversation
pub const SYSTEM_PROMPT: &str = "You are HSG AI, a helpful, intelligent, and conversational virtual assistant.
You are designed to answer questions, provide explanations, assist with tasks, and hold meaningful conversations.
Avoid mentioning that you are powered by OpenRouter or any backend technologies.
Stay professional, friendly, and helpful at all times.
If a question is unclear, politely ask for more information.
Always respond as HSG AI.";

/// The fixed system turn
pub fn system_turn() -> ChatTurn {
    ChatTurn::system(SYSTEM_PROMPT)
}

/// `[system turn] ++ history ++ [user turn]`, history copied verbatim
pub fn assemble_messages(history: &[ChatTurn], message: &str) -> Vec<ChatTurn> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(system_turn());
    messages.extend_from_slice(history);
    messages.push(ChatTurn::user(message));
    messages
}

/// Validate an inbound request and build the upstream request for it
///
/// A missing or empty message is rejected before anything is sent.
pub fn build_completion_request(request: &ChatRequest) -> RelayResult<CompletionRequest> {
    let message = request
        .message
        .as_deref()
        .filter(|message| !message.is_empty())
        .ok_or(RelayError::ClientInput)?;

    Ok(CompletionRequest {
        model: MODEL.to_string(),
        messages: assemble_messages(&request.history, message),
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
        stream: false,
    })
}

/// The relay: one inbound request, at most one upstream call
pub struct Relay {
    provider: Arc<dyn CompletionProvider>,
}

impl Relay {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Name of the upstream provider
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Handle one chat request
    ///
    /// Every failure is returned as a [`RelayError`]; nothing is retried.
    /// Dropping the returned future cancels the upstream call.
    pub async fn handle_chat(&self, request: ChatRequest) -> RelayResult<ChatReply> {
        let completion = build_completion_request(&request).map_err(|err| {
            warn!(history_len = %request.history.len(), "Rejected chat request without a message");
            err
        })?;

        let ctx = RequestContext::new(self.provider.name())
            .with_model(&completion.model)
            .with_history_len(request.history.len());
        let span = ctx.create_span();

        async move {
            ctx.log_request_start();

            let outcome = self.provider.complete(&completion, &ctx).await;
            let result = classify(outcome.as_ref());

            match (&result, &outcome) {
                (Ok(reply), _) => ctx.log_request_complete(reply.len()),
                (Err(err), Ok(response)) => ctx.log_upstream_rejection(
                    response.status.as_u16(),
                    &response.body_text(),
                    &err.to_string(),
                ),
                (Err(err), Err(_)) => ctx.log_error(&err.to_string()),
            }

            result.map(ChatReply::new)
        }
        .instrument(span)
        .await
    }
}
