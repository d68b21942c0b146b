use super::{extract_str, get_json, ServiceConfig, Shortener};
use crate::error::Result;
use crate::transport::Transport;

pub const ID: &str = "bitly";
pub const DEFAULT_API_URL: &str = "https://api-ssl.bitly.com/v3/shorten?access_token=";

/// Bitly v3: the key is the access token, the short URL comes back under `data.url`.
pub struct Bitly {
    config: ServiceConfig,
}

impl Bitly {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }
}

impl Shortener for Bitly {
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
        extract_str(ID, &response, "/data/url")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShortnError;
    use crate::transport::mock::{MockTransport, RecordedRequest};

    fn bitly() -> Bitly {
        Bitly::new(ServiceConfig::new(DEFAULT_API_URL, Some("TOKEN".into())))
    }

    #[test]
    fn target_appends_key_and_long_url_param() {
        assert_eq!(
            bitly().format_request_target(),
            "https://api-ssl.bitly.com/v3/shorten?access_token=TOKEN&longUrl="
        );
    }

    #[test]
    fn shortens_from_data_url() {
        let transport = MockTransport::replying(r#"{"data":{"url":"http://short/x"}}"#);
        let short = bitly()
            .shorten(&transport, "https://example.com/a?b=c")
            .unwrap();
        assert_eq!(short, "http://short/x");
        assert_eq!(
            transport.requests(),
            vec![RecordedRequest::Get {
                url: "https://api-ssl.bitly.com/v3/shorten?access_token=TOKEN&longUrl=https%3A%2F%2Fexample.com%2Fa%3Fb%3Dc".into()
            }]
        );
    }

    #[test]
    fn missing_data_url_is_protocol_error() {
        let transport = MockTransport::replying(r#"{"status_code":500,"data":[]}"#);
        let err = bitly().shorten(&transport, "example.com").unwrap_err();
        assert!(matches!(err, ShortnError::BackendProtocol { .. }));
    }

    #[test]
    fn non_json_body_is_protocol_error() {
        let transport = MockTransport::replying("<html>rate limited</html>");
        let err = bitly().shorten(&transport, "example.com").unwrap_err();
        assert!(matches!(err, ShortnError::BackendProtocol { .. }));
    }

    #[test]
    fn http_error_keeps_body() {
        let transport = MockTransport::failing_with_status(403, "INVALID_ARG_ACCESS_TOKEN");
        match bitly().shorten(&transport, "example.com").unwrap_err() {
            ShortnError::Transport { status, body, .. } => {
                assert_eq!(status, Some(403));
                assert_eq!(body.as_deref(), Some("INVALID_ARG_ACCESS_TOKEN"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
