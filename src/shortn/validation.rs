use crate::error::{Result, ShortnError};
use once_cell::sync::Lazy;
use regex::Regex;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^https?://",
        r"(?:",
        r"(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+(?:[a-z]{2,6}\.?|[a-z0-9-]{2,}\.?)",
        r"|localhost",
        r"|[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}",
        r")",
        r"(?::[0-9]+)?",
        r"(?:/?|[/?]\S+)$",
    ))
    .expect("URL pattern is a valid regex")
});

/// Whether `input` looks like a web URL. A missing scheme is tolerated:
/// anything not starting with `http` is checked as `http://{input}`.
pub fn is_valid_url(input: &str) -> bool {
    if input.starts_with("http") {
        URL_PATTERN.is_match(input)
    } else {
        URL_PATTERN.is_match(&format!("http://{}", input))
    }
}

pub fn validate_url(input: &str) -> Result<()> {
    if is_valid_url(input) {
        Ok(())
    } else {
        Err(ShortnError::InvalidUrl(input.to_string()))
    }
}
