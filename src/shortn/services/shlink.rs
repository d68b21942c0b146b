use super::{extract_str, get_json, ServiceConfig, Shortener};
use crate::error::Result;
use crate::transport::Transport;

pub const ID: &str = "shlink";

/// Self-hosted Shlink, e.g. `https://s.example.org/rest/v1/short-urls/shorten?apiKey=`.
/// There is no public default endpoint.
pub struct Shlink {
    config: ServiceConfig,
}

impl Shlink {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }
}

impl Shortener for Shlink {
    fn id(&self) -> &'static str {
        ID
    }

    fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn format_request_target(&self) -> String {
        format!("{}{}&longUrl=", self.config.api_url, self.config.key_or_empty())
    }

    fn shorten(&self, transport: &dyn Transport, long_url: &str) -> Result<String> {
        let response = get_json(self, transport, long_url)?;
        extract_str(ID, &response, "/shortUrl")
    }
}
