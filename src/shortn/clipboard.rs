//! Clipboard support for the CLI. Pipes into the platform's clipboard tool
//! instead of owning the selection, so the copied text outlives the process.

use crate::error::{Result, ShortnError};
use std::io::Write;
use std::process::{Command, Stdio};

/// Candidate commands, tried in order.
#[cfg(target_os = "macos")]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut last_error = None;
    for (program, args) in CLIPBOARD_COMMANDS {
        match pipe_into(program, args, text) {
            Ok(()) => return Ok(()),
            Err(e) => last_error = Some(e),
        }
    }
    Err(last_error.unwrap_or_else(|| {
        ShortnError::Clipboard("Clipboard not supported on this platform".to_string())
    }))
}

fn pipe_into(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ShortnError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| ShortnError::Clipboard(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| ShortnError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;
    if status.success() {
        Ok(())
    } else {
        Err(ShortnError::Clipboard(format!("{} exited with error", program)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_clipboard_error() {
        let err = pipe_into("shortn-definitely-not-a-program", &[], "x").unwrap_err();
        assert!(matches!(err, ShortnError::Clipboard(_)));
    }
}
