//! Integration tests for the HSG relay
//!
//! These tests drive the real router over HTTP, with the completion API
//! replaced by a wiremock server.

mod health;
