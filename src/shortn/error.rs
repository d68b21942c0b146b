use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShortnError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Network or HTTP-level failure. `body` holds the response body when the
    /// server answered with a non-2xx status.
    #[error("Request to {url} failed: {}", transport_detail(.status, .body, .cause))]
    Transport {
        url: String,
        status: Option<u16>,
        body: Option<String>,
        cause: Option<String>,
    },

    /// The backend answered, but not in the shape it promised.
    #[error("Unexpected response from {service}: {reason}")]
    BackendProtocol { service: String, reason: String },

    #[error("History document is corrupt: {0}")]
    StoreCorruption(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl ShortnError {
    /// True for failures that callers report as "shortening failed".
    pub fn is_shortening_failure(&self) -> bool {
        matches!(
            self,
            ShortnError::Transport { .. } | ShortnError::BackendProtocol { .. }
        )
    }

    pub(crate) fn protocol(service: &str, reason: impl Into<String>) -> Self {
        ShortnError::BackendProtocol {
            service: service.to_string(),
            reason: reason.into(),
        }
    }
}

fn transport_detail(status: &Option<u16>, body: &Option<String>, cause: &Option<String>) -> String {
    match (status, body, cause) {
        (Some(code), Some(body), _) if !body.is_empty() => format!("HTTP {}: {}", code, body),
        (Some(code), _, _) => format!("HTTP {}", code),
        (None, _, Some(cause)) => cause.clone(),
        (None, _, None) => "unknown transport error".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ShortnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_message_prefers_body() {
        let err = ShortnError::Transport {
            url: "https://api.example/x".into(),
            status: Some(403),
            body: Some("{\"status_txt\":\"INVALID_ARG_ACCESS_TOKEN\"}".into()),
            cause: None,
        };
        let msg = err.to_string();
        assert!(msg.contains("HTTP 403"));
        assert!(msg.contains("INVALID_ARG_ACCESS_TOKEN"));
    }

    #[test]
    fn transport_message_falls_back_to_cause() {
        let err = ShortnError::Transport {
            url: "https://api.example/x".into(),
            status: None,
            body: None,
            cause: Some("connection refused".into()),
        };
        assert_eq!(
            err.to_string(),
            "Request to https://api.example/x failed: connection refused"
        );
    }

    #[test]
    fn classifies_shortening_failures() {
        assert!(ShortnError::protocol("bitly", "missing field").is_shortening_failure());
        assert!(!ShortnError::InvalidUrl("x".into()).is_shortening_failure());
        assert!(!ShortnError::StoreCorruption("x".into()).is_shortening_failure());
    }
}
