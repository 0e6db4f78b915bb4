//! Wire types for the relay
//!
//! Inbound chat requests from the web client, the outbound completion request
//! sent upstream, and the subset of the upstream response we read.

use serde::{Deserialize, Deserializer, Serialize};

/// Chat message role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One role-tagged message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }
}

/// Inbound request from the web client
///
/// `message` is optional at the wire level so that a missing field and an
/// empty string are both reported as client input errors rather than as
/// deserialization failures. A missing or null `history` is empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_history")]
    pub history: Vec<ChatTurn>,
}

fn deserialize_history<'de, D>(deserializer: D) -> Result<Vec<ChatTurn>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ChatTurn>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: Vec<ChatTurn>) -> Self {
        self.history = history;
        self
    }
}

/// Normalized reply sent back to the web client
///
/// Used both for model answers and for upstream failures, which carry one of
/// the fixed user-facing messages instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
}

impl ChatReply {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

/// Outbound request to the completion API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatTurn>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub stream: bool,
}

/// Message inside an upstream choice
///
/// `content` can legitimately be null upstream (e.g. tool-call responses), so
/// it is optional here and checked by the classifier.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// One upstream completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionMessage,
}

/// Upstream completion response; unknown fields are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}
