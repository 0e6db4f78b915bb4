//! Header utilities for upstream requests
//!
//! Builds the fixed header set sent to the completion API and renders header
//! maps for logging with credentials redacted.

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue, AUTHORIZATION, CONTENT_TYPE,
    PROXY_AUTHORIZATION, SET_COOKIE,
};
use secrecy::{ExposeSecret, SecretString};

/// Header carrying the referer tag the completion API uses for attribution
pub const HTTP_REFERER: HeaderName = HeaderName::from_static("http-referer");
/// Header carrying the application title tag
pub const X_TITLE: HeaderName = HeaderName::from_static("x-title");

/// Placeholder written in place of sensitive header values
const REDACTED: &str = "[REDACTED]";

/// Headers whose values must never appear in logs
const SENSITIVE_HEADERS: &[HeaderName] = &[AUTHORIZATION, PROXY_AUTHORIZATION, SET_COOKIE];

/// Build the headers for every completion request
///
/// Client headers are never forwarded; the credential always comes from
/// configuration.
pub fn build_default_headers(
    api_key: &SecretString,
    referer: &str,
    title: &str,
) -> Result<HeaderMap, InvalidHeaderValue> {
    let mut headers = HeaderMap::new();

    headers.insert(HTTP_REFERER, HeaderValue::from_str(referer)?);
    headers.insert(X_TITLE, HeaderValue::from_str(title)?);

    let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(headers)
}

/// Check if a header value must be hidden from logs
pub fn is_sensitive_header(name: &HeaderName) -> bool {
    SENSITIVE_HEADERS.contains(name)
}

/// Render headers as `name: value` pairs with sensitive values redacted
pub fn redact_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let rendered = if is_sensitive_header(name) || value.is_sensitive() {
                REDACTED.to_string()
            } else {
                value.to_str().unwrap_or("<binary>").to_string()
            };
            (name.as_str().to_string(), rendered)
        })
        .collect()
}
