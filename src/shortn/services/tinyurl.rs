use super::{get_text, ServiceConfig, Shortener};
use crate::error::{Result, ShortnError};
use crate::transport::Transport;

pub const ID: &str = "tinyurl";
pub const DEFAULT_API_URL: &str = "https://tinyurl.com/api-create.php?url=";

/// TinyURL's create endpoint answers with the short URL as plain text.
pub struct TinyUrl {
    config: ServiceConfig,
}

impl TinyUrl {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }
}

impl Shortener for TinyUrl {
    fn id(&self) -> &'static str {
        ID
    }

    fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn shorten(&self, transport: &dyn Transport, long_url: &str) -> Result<String> {
        let body = get_text(self, transport, long_url)?;
        let short = body.trim();
        if !short.starts_with("http://") && !short.starts_with("https://") {
            return Err(ShortnError::protocol(
                ID,
                format!("expected a URL, got {:?}", short),
            ));
        }
        Ok(short.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::{MockTransport, RecordedRequest};

    fn tinyurl() -> TinyUrl {
        TinyUrl::new(ServiceConfig::new(DEFAULT_API_URL, None))
    }

    #[test]
    fn plain_text_body_is_the_short_url() {
        let transport = MockTransport::replying("https://tinyurl.com/2p8m3kz4\n");
        assert_eq!(
            tinyurl().shorten(&transport, "example.com").unwrap(),
            "https://tinyurl.com/2p8m3kz4"
        );
        assert_eq!(
            transport.requests(),
            vec![RecordedRequest::Get {
                url: format!("{}example.com", DEFAULT_API_URL)
            }]
        );
    }

    #[test]
    fn error_text_is_protocol_error() {
        for body in ["", "Error", "{\"error\":true}"] {
            let transport = MockTransport::replying(body);
            assert!(matches!(
                tinyurl().shorten(&transport, "example.com"),
                Err(ShortnError::BackendProtocol { .. })
            ));
        }
    }

    #[test]
    fn invalid_utf8_is_protocol_error() {
        let transport = MockTransport::replying(vec![0xff, 0xfe, 0x00]);
        assert!(matches!(
            tinyurl().shorten(&transport, "example.com"),
            Err(ShortnError::BackendProtocol { .. })
        ));
    }
}
