//! Proxy module
//!
//! Handles request forwarding to the upstream completion API.

pub mod headers;
pub mod logging;
pub mod openrouter;
pub mod provider;

pub use logging::RequestContext;
pub use openrouter::{OpenRouterProvider, UPSTREAM_TIMEOUT};
pub use provider::{CompletionProvider, TransportError, UpstreamResponse};
