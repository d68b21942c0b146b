use super::{extract_str, get_json, ServiceConfig, Shortener};
use crate::error::Result;
use crate::transport::Transport;

pub const ID: &str = "isgood";
pub const DEFAULT_API_URL: &str = "https://is.gd/create.php?format=json&url=";

/// is.gd: key-less GET, the short URL comes back under `shorturl`.
pub struct IsGood {
    config: ServiceConfig,
}

impl IsGood {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }
}

impl Shortener for IsGood {
    fn id(&self) -> &'static str {
        ID
    }

    fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn shorten(&self, transport: &dyn Transport, long_url: &str) -> Result<String> {
        let response = get_json(self, transport, long_url)?;
        extract_str(ID, &response, "/shorturl")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShortnError;
    use crate::transport::mock::{MockTransport, RecordedRequest};

    #[test]
    fn target_is_raw_api_url_even_with_key() {
        let backend = IsGood::new(ServiceConfig::new(DEFAULT_API_URL, Some("ignored".into())));
        assert_eq!(backend.format_request_target(), DEFAULT_API_URL);
    }

    #[test]
    fn shortens_from_shorturl_field() {
        let backend = IsGood::new(ServiceConfig::new(DEFAULT_API_URL, None));
        let transport = MockTransport::replying(r#"{ "shorturl": "https://is.gd/Ab12Cd" }"#);

        assert_eq!(
            backend.shorten(&transport, "http://example.com").unwrap(),
            "https://is.gd/Ab12Cd"
        );
        assert_eq!(
            transport.requests(),
            vec![RecordedRequest::Get {
                url: format!("{}http%3A%2F%2Fexample.com", DEFAULT_API_URL)
            }]
        );
    }

    #[test]
    fn service_error_payload_is_protocol_error() {
        let backend = IsGood::new(ServiceConfig::new(DEFAULT_API_URL, None));
        let transport =
            MockTransport::replying(r#"{"errorcode":1,"errormessage":"Please specify a valid URL"}"#);
        assert!(matches!(
            backend.shorten(&transport, "http://example.com"),
            Err(ShortnError::BackendProtocol { .. })
        ));
    }
}
