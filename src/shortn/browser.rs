//! Open a URL in the user's default browser.

use crate::error::{Result, ShortnError};
use crate::validation::is_valid_url;
use std::process::{Command, Stdio};

#[cfg(target_os = "macos")]
fn opener(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn opener(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

/// Hand `url` to the platform opener. Only web URLs are accepted, so a
/// history entry can never be used to launch a local file.
pub fn open_in_browser(url: &str) -> Result<()> {
    if !url.starts_with("http") || !is_valid_url(url) {
        return Err(ShortnError::InvalidUrl(url.to_string()));
    }

    opener(url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|e| ShortnError::Api(format!("Failed to open browser: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_non_web_targets() {
        for target in ["/etc/passwd", "file:///tmp/x", "example.com", "javascript:alert(1)"] {
            assert!(matches!(
                open_in_browser(target),
                Err(ShortnError::InvalidUrl(_))
            ));
        }
    }
}
