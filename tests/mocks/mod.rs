//! Mock infrastructure for testing external services
//!
//! The relay has one external dependency, the OpenRouter completion API,
//! which is mocked with wiremock.


pub use openrouter::*;
