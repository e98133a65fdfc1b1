//! The filter bridge.
//!
//! [`FilterBridge`] implements [`LineFilter`] by spawning the configured shell
//! with the user's command, feeding the addressed line to its stdin while
//! reading the first line of its stdout, and waiting for the child to exit.
//! The whole round trip, including the write, is bounded by the configured
//! timeout.

use std::time::Instant;

use edlin_foundation::{LineBuffer, ProcessError, Result};
use tracing::{debug, info};

use crate::config::FilterConfig;
use crate::process::{
    ChildGuard, Received, check_written, receive_line, spawn_reader, spawn_writer,
};
use crate::request::{FilterOutcome, FilterRequest, decode_line};

/// Tracing target for filter bridge operations.
const BRIDGE_TARGET: &str = "edlin_filter::bridge";

/// Runs a single line of text through an external command.
pub trait LineFilter {
    /// Runs `request` and returns the first line of output.
    ///
    /// # Errors
    ///
    /// Returns a [`ProcessError`] if the child cannot be run or produces no
    /// usable output.
    fn run(&self, request: &FilterRequest) -> std::result::Result<FilterOutcome, ProcessError>;

    /// Filters 1-based `line` of `buffer` through `command`, replacing it with
    /// the output on success.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if `line` does not exist, or a process
    /// error if the filter fails. The buffer is unchanged on error.
    fn apply(&self, buffer: &mut LineBuffer, line: usize, command: &str) -> Result<FilterOutcome> {
        let request = FilterRequest::new(buffer.require(line)?, command);
        let outcome = self.run(&request)?;
        buffer.replace(line, outcome.text.clone())?;
        Ok(outcome)
    }
}

/// Executes filters as child processes of a shell.
#[derive(Clone, Debug, Default)]
pub struct FilterBridge {
    config: FilterConfig,
}

impl FilterBridge {
    /// Creates a bridge with the given configuration.
    #[must_use]
    pub const fn new(config: FilterConfig) -> Self {
        Self { config }
    }
}

impl LineFilter for FilterBridge {
    fn run(&self, request: &FilterRequest) -> std::result::Result<FilterOutcome, ProcessError> {
        let command = request.command.as_str();
        let started = Instant::now();
        let deadline = self.config.timeout.map(|timeout| started + timeout);
        let timeout = self.config.timeout.unwrap_or_default();

        let mut child = ChildGuard::spawn(&self.config, command)?;
        let stdin = child.take_stdin()?;
        let stdout = child.take_stdout()?;

        // Reader before writer: a child echoing a long line must never block
        // on a full stdout pipe.
        let lines = spawn_reader(stdout, command)?;
        let written = spawn_writer(stdin, command, request.text.clone())?;

        let bytes = match receive_line(&lines, command, deadline)? {
            Received::Line(bytes) => bytes,
            Received::TimedOut => return Err(child.timed_out(timeout)),
        };
        debug!(
            target: BRIDGE_TARGET,
            command,
            bytes_read = bytes.len(),
            "read first line from filter stdout"
        );

        let status = child.wait(deadline, timeout)?;
        check_written(&written)?;
        if self.config.require_success && !status.success() {
            return Err(ProcessError::NonZeroExit {
                command: command.to_owned(),
                status,
            });
        }

        let text = decode_line(bytes).ok_or_else(|| ProcessError::NoOutput {
            command: command.to_owned(),
        })?;
        let elapsed = started.elapsed();

        info!(
            target: BRIDGE_TARGET,
            command,
            %status,
            elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            "filter completed"
        );

        Ok(FilterOutcome {
            text,
            status,
            elapsed,
        })
    }
}
