//! Filter requests and outcomes.

use std::process::ExitStatus;
use std::time::Duration;

/// One line of text to send through one shell command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterRequest {
    /// The text written to the child's stdin.
    pub text: String,
    /// The shell command string.
    pub command: String,
}

impl FilterRequest {
    /// Creates a request.
    pub fn new(text: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            command: command.into(),
        }
    }
}

/// A successful filter run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOutcome {
    /// The first line the child wrote, without its line ending.
    pub text: String,
    /// How the child exited.
    pub status: ExitStatus,
    /// Wall time from spawn to exit.
    pub elapsed: Duration,
}

/// Turns the raw bytes of the child's first line into text.
///
/// Returns `None` when the child wrote nothing at all. A lone newline is a
/// valid (empty) line.
pub(crate) fn decode_line(mut bytes: Vec<u8>) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
    }
    Some(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}
