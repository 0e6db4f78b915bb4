//! Configuration management for the HSG relay
//!
//! Configuration is loaded from environment variables once at startup and
//! never re-read while serving requests.

use anyhow::{bail, Context, Result};
use secrecy::{ExposeSecret, SecretString};
use std::env;

/// Default upstream completion API base URL
pub const DEFAULT_UPSTREAM_URL: &str = "https://openrouter.ai/api/v1";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Completion API base URL (without the `/chat/completions` suffix)
    pub upstream_url: String,
    /// Bearer credential for the completion API
    pub api_key: SecretString,

    /// Value sent as the `HTTP-Referer` header
    pub referer: String,
    /// Value sent as the `X-Title` header
    pub title: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Fails if no API key is configured. There is no built-in fallback key.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("HSG_OPENROUTER_API_KEY")
            .or_else(|_| env::var("OPENROUTER_API_KEY"))
            .context("HSG_OPENROUTER_API_KEY (or OPENROUTER_API_KEY) must be set")?;
        let api_key = SecretString::from(api_key);

        if api_key.expose_secret().trim().is_empty() {
            bail!("HSG_OPENROUTER_API_KEY must not be empty");
        }

        Ok(Self {
            host: env::var("HSG_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("HSG_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("Invalid HSG_PORT")?,

            upstream_url: env::var("HSG_UPSTREAM_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string()),
            api_key,

            referer: env::var("HSG_REFERER")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            title: env::var("HSG_TITLE").unwrap_or_else(|_| "HSG AI Chat".to_string()),
        })
    }

    /// Full URL of the chat completions endpoint
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.upstream_url)
    }
}
