//! # Shortener Backends
//!
//! One [`Shortener`] implementation per remote service. Backends are
//! stateless strategies: they hold the [`ServiceConfig`] they were built with
//! and borrow a [`Transport`] for each call, which keeps them trivially
//! testable against [`crate::transport::mock::MockTransport`].
//!
//! Services differ in three places only:
//! - how the request target is formatted ([`Shortener::format_request_target`]),
//! - GET with the encoded URL appended vs. POST with a JSON body,
//! - where the short URL sits in the response.
//!
//! The shared request/extract helpers live here; each variant is a few lines.

use crate::error::{Result, ShortnError};
use crate::transport::Transport;
use serde_json::Value;

pub mod bitly;
pub mod google;
pub mod isgood;
pub mod shlink;
pub mod tinyurl;

/// Connection parameters for one backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    pub api_url: String,
    pub api_key: Option<String>,
}

impl ServiceConfig {
    pub fn new(api_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key,
        }
    }

    pub(crate) fn key_or_empty(&self) -> &str {
        self.api_key.as_deref().unwrap_or("")
    }
}

pub trait Shortener {
    /// Registry identifier of this service.
    fn id(&self) -> &'static str;

    fn config(&self) -> &ServiceConfig;

    /// The URL requests are sent to, before the long URL is appended.
    fn format_request_target(&self) -> String {
        self.config().api_url.clone()
    }

    fn shorten(&self, transport: &dyn Transport, long_url: &str) -> Result<String>;
}

/// GET `target + encode(long_url)` and parse the UTF-8 body as JSON.
pub(crate) fn get_json<B: Shortener + ?Sized>(
    backend: &B,
    transport: &dyn Transport,
    long_url: &str,
) -> Result<Value> {
    let body = get_text(backend, transport, long_url)?;
    serde_json::from_str(&body)
        .map_err(|e| ShortnError::protocol(backend.id(), format!("invalid JSON: {}", e)))
}

/// GET `target + encode(long_url)` and return the body as text.
pub(crate) fn get_text<B: Shortener + ?Sized>(
    backend: &B,
    transport: &dyn Transport,
    long_url: &str,
) -> Result<String> {
    let target = request_target(backend)?;
    let url = format!("{}{}", target, urlencoding::encode(long_url));
    let bytes = transport.get(&url)?;
    String::from_utf8(bytes)
        .map_err(|e| ShortnError::protocol(backend.id(), format!("body is not UTF-8: {}", e)))
}

/// POST `body` to the formatted target and parse the response as JSON.
pub(crate) fn post_json<B: Shortener + ?Sized>(
    backend: &B,
    transport: &dyn Transport,
    body: &Value,
) -> Result<Value> {
    let target = request_target(backend)?;
    let bytes = transport.post_json(&target, body)?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ShortnError::protocol(backend.id(), format!("invalid JSON: {}", e)))
}

/// Pull the string at `pointer` (RFC 6901) out of a response.
pub(crate) fn extract_str(service: &str, response: &Value, pointer: &str) -> Result<String> {
    response
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            ShortnError::protocol(service, format!("no string at `{}` in {}", pointer, response))
        })
}

fn request_target<B: Shortener + ?Sized>(backend: &B) -> Result<String> {
    if backend.config().api_url.is_empty() {
        return Err(ShortnError::Config(format!(
            "no API URL configured for service `{}`",
            backend.id()
        )));
    }
    Ok(backend.format_request_target())
}
