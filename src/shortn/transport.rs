//! # HTTP Transport
//!
//! The leaf of the shortening path: one blocking request, raw response bytes
//! back. Interpreting those bytes is each backend's job.
//!
//! Non-2xx responses become [`ShortnError::Transport`] with the body attached,
//! so the service's own error text reaches the log. There is no retry, and
//! no timeout unless one is configured.

use crate::error::{Result, ShortnError};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use ureq::Agent;

pub trait Transport {
    /// GET `url` and return the body of a 2xx response.
    fn get(&self, url: &str) -> Result<Vec<u8>>;

    /// POST `body` as `application/json` and return the body of a 2xx response.
    fn post_json(&self, url: &str, body: &Value) -> Result<Vec<u8>>;
}

type UreqResult = std::result::Result<ureq::http::Response<ureq::Body>, ureq::Error>;

pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .into();
        Self { agent }
    }

    fn finish(url: &str, response: UreqResult) -> Result<Vec<u8>> {
        let mut response = response.map_err(|e| unreachable_error(url, e))?;
        let status = response.status();
        let body = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| unreachable_error(url, e))?;

        debug!(url, status = status.as_u16(), bytes = body.len(), "response received");
        if !status.is_success() {
            return Err(ShortnError::Transport {
                url: url.to_string(),
                status: Some(status.as_u16()),
                body: Some(String::from_utf8_lossy(&body).into_owned()),
                cause: None,
            });
        }
        Ok(body)
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "GET");
        Self::finish(url, self.agent.get(url).call())
    }

    fn post_json(&self, url: &str, body: &Value) -> Result<Vec<u8>> {
        debug!(url, "POST");
        Self::finish(url, self.agent.post(url).send_json(body))
    }
}

fn unreachable_error(url: &str, err: ureq::Error) -> ShortnError {
    ShortnError::Transport {
        url: url.to_string(),
        status: None,
        body: None,
        cause: Some(err.to_string()),
    }
}


/// Scripted transport for tests: answers every request with the same reply
/// and remembers what was asked.
#[cfg(any(test, feature = "test_utils"))]
pub mod mock {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RecordedRequest {
        Get { url: String },
        Post { url: String, body: Value },
    }

    #[derive(Debug, Clone)]
    enum Reply {
        Body(Vec<u8>),
        Status(u16, String),
        Unreachable(String),
    }

    #[derive(Debug)]
    pub struct MockTransport {
        reply: Reply,
        requests: RefCell<Vec<RecordedRequest>>,
    }

    impl MockTransport {
        pub fn replying(body: impl Into<Vec<u8>>) -> Self {
            Self::with_reply(Reply::Body(body.into()))
        }

        pub fn failing_with_status(status: u16, body: impl Into<String>) -> Self {
            Self::with_reply(Reply::Status(status, body.into()))
        }

        pub fn unreachable(cause: impl Into<String>) -> Self {
            Self::with_reply(Reply::Unreachable(cause.into()))
        }

        fn with_reply(reply: Reply) -> Self {
            Self {
                reply,
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.borrow().clone()
        }

        fn answer(&self, url: &str) -> Result<Vec<u8>> {
            match &self.reply {
                Reply::Body(body) => Ok(body.clone()),
                Reply::Status(status, body) => Err(ShortnError::Transport {
                    url: url.to_string(),
                    status: Some(*status),
                    body: Some(body.clone()),
                    cause: None,
                }),
                Reply::Unreachable(cause) => Err(ShortnError::Transport {
                    url: url.to_string(),
                    status: None,
                    body: None,
                    cause: Some(cause.clone()),
                }),
            }
        }
    }

    impl Transport for MockTransport {
        fn get(&self, url: &str) -> Result<Vec<u8>> {
            self.requests.borrow_mut().push(RecordedRequest::Get {
                url: url.to_string(),
            });
            self.answer(url)
        }

        fn post_json(&self, url: &str, body: &Value) -> Result<Vec<u8>> {
            self.requests.borrow_mut().push(RecordedRequest::Post {
                url: url.to_string(),
                body: body.clone(),
            });
            self.answer(url)
        }
    }
}
