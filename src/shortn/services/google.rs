use super::{extract_str, post_json, ServiceConfig, Shortener};
use crate::error::Result;
use crate::transport::Transport;
use serde_json::json;

pub const ID: &str = "google";
pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/urlshortener/v1/url?key=";

/// goo.gl: JSON POST of `{longUrl}`, the short URL comes back under `id`.
pub struct Google {
    config: ServiceConfig,
}

impl Google {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }
}

impl Shortener for Google {
    fn id(&self) -> &'static str {
        ID
    }

    fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn format_request_target(&self) -> String {
        format!("{}{}", self.config.api_url, self.config.key_or_empty())
    }

    fn shorten(&self, transport: &dyn Transport, long_url: &str) -> Result<String> {
        let response = post_json(self, transport, &json!({ "longUrl": long_url }))?;
        extract_str(ID, &response, "/id")
    }
}
