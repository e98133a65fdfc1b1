//! Error types for edlin.
//!
//! Uses `thiserror` for ergonomic error definition. Every error the editor can
//! raise during a session is reported to the user and the session continues;
//! only [`ErrorKind::Terminal`] ends the prompt loop.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

/// The main error type for edlin operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a file I/O error for `path`.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            source,
        })
    }

    /// Creates an out-of-range error for `line` where `max` is the largest
    /// line number the operation would have accepted.
    #[must_use]
    pub fn out_of_range(line: usize, max: usize) -> Self {
        Self::new(ErrorKind::OutOfRange { line, max })
    }

    /// Creates an unrecognized command error that echoes `raw` back.
    #[must_use]
    pub fn unrecognized(raw: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnrecognizedCommand(raw.into()))
    }

    /// Creates a configuration error for the setting `key`.
    #[must_use]
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config {
            key: key.into(),
            message: message.into(),
        })
    }

    /// Creates a terminal (line editor) error.
    #[must_use]
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Terminal(message.into()))
    }

    /// Returns true if this error must end the prompt loop.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self.kind, ErrorKind::Terminal(_))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Self {
        Self::new(ErrorKind::Parse(err))
    }
}

impl From<ProcessError> for Error {
    fn from(err: ProcessError) -> Self {
        Self::new(ErrorKind::Process(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Malformed or incomplete command syntax.
    #[error("parse error: {0}")]
    Parse(SyntaxError),

    /// A file could not be opened, read or written.
    #[error("cannot open {}: {source}", .path.display())]
    Io {
        /// The path that was being accessed.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },

    /// A line number outside the bounds accepted by the operation.
    #[error("line {line} is out of range ({})", describe_range(.max))]
    OutOfRange {
        /// The requested 1-based line number.
        line: usize,
        /// The largest accepted line number (0 when nothing is accepted).
        max: usize,
    },

    /// A filter child process failed.
    #[error("filter failed: {0}")]
    Process(ProcessError),

    /// The input did not start with a known command tag.
    #[error("unrecognized command: {0}")]
    UnrecognizedCommand(String),

    /// A configuration value could not be understood.
    #[error("invalid {key}: {message}")]
    Config {
        /// The configuration key.
        key: String,
        /// What was wrong with the value.
        message: String,
    },

    /// The terminal line editor failed.
    #[error("terminal error: {0}")]
    Terminal(String),
}

fn describe_range(max: &usize) -> String {
    match *max {
        0 => "buffer is empty".to_string(),
        1 => "only line 1 is valid".to_string(),
        max => format!("valid lines are 1 to {max}"),
    }
}

/// Syntax errors raised while parsing one line of user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The tag was not followed by exactly one space.
    #[error("`{tag}` must be followed by a single space")]
    MissingSeparator {
        /// The command tag.
        tag: char,
    },

    /// The line number was not followed by a space.
    #[error("expected a space after the line number in `{tag}`")]
    MissingTextSeparator {
        /// The command tag.
        tag: char,
    },

    /// A required argument was absent.
    #[error("`{tag}` requires {argument}")]
    MissingArgument {
        /// The command tag.
        tag: char,
        /// Human readable name of the missing argument.
        argument: &'static str,
    },

    /// The line number token was not a non-negative integer.
    #[error("invalid line number `{token}`")]
    InvalidLineNumber {
        /// The offending token.
        token: String,
    },

    /// A command that takes no arguments was given some.
    #[error("`{tag}` takes no arguments, got `{rest}`")]
    UnexpectedArgument {
        /// The command tag.
        tag: char,
        /// The trailing text.
        rest: String,
    },
}

/// Failures of a filter child process.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The shell could not be started.
    #[error("cannot start `{shell}`: {source}")]
    Spawn {
        /// The shell program.
        shell: String,
        /// The spawn failure.
        source: io::Error,
    },

    /// The child was spawned without one of its piped handles.
    #[error("cannot capture the child's {stream}")]
    PipeUnavailable {
        /// Which stream was missing ("stdin" or "stdout").
        stream: &'static str,
    },

    /// Writing the line to the child failed.
    #[error("cannot write to `{command}`: {source}")]
    Write {
        /// The filter command.
        command: String,
        /// The write failure.
        source: io::Error,
    },

    /// Reading the child's output failed.
    #[error("cannot read from `{command}`: {source}")]
    Read {
        /// The filter command.
        command: String,
        /// The read failure.
        source: io::Error,
    },

    /// Waiting for the child to terminate failed.
    #[error("cannot wait for `{command}`: {source}")]
    Wait {
        /// The filter command.
        command: String,
        /// The wait failure.
        source: io::Error,
    },

    /// The child closed its output without writing anything.
    #[error("`{command}` produced no output")]
    NoOutput {
        /// The filter command.
        command: String,
    },

    /// The child did not finish within the configured timeout.
    #[error("`{command}` timed out after {timeout:?} and was killed")]
    TimedOut {
        /// The filter command.
        command: String,
        /// The timeout that elapsed.
        timeout: Duration,
    },

    /// The child exited unsuccessfully while strict mode was enabled.
    #[error("`{command}` failed with {status}")]
    NonZeroExit {
        /// The filter command.
        command: String,
        /// The child's exit status.
        status: ExitStatus,
    },
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
