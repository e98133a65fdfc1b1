//! Session state for the REPL.
//!
//! The session owns the line buffer and the filter used by `!`. Every command
//! handler receives the buffer through the session; there is no global state.

use std::path::Path;

use edlin_filter::{FilterBridge, LineFilter};
use edlin_foundation::{Error, LineBuffer, Result};
use edlin_parser::Command;
use tracing::{debug, info};

use crate::fileio;

/// Tracing target for session dispatch.
const SESSION_TARGET: &str = "edlin_runtime::session";

/// What a successfully executed command asks the REPL to do next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to show.
    Continue,
    /// Print the buffer.
    List,
    /// A file replaced the buffer.
    Loaded {
        /// Number of lines read.
        lines: usize,
    },
    /// The buffer was written to a file.
    Saved {
        /// Number of lines written.
        lines: usize,
    },
    /// A line was set or appended.
    Edited {
        /// The line that changed.
        line: usize,
        /// Buffer size afterwards.
        size: usize,
    },
    /// A line was replaced by filter output.
    Filtered {
        /// The line that changed.
        line: usize,
    },
    /// End the session.
    Quit,
}

/// State for an interactive editing session.
#[derive(Debug, Default)]
pub struct Session<F: LineFilter = FilterBridge> {
    /// The buffer being edited.
    buffer: LineBuffer,

    /// Runs `!` commands.
    filter: F,
}

impl Session {
    /// Creates a session with an empty buffer and the default filter bridge.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: LineFilter> Session<F> {
    /// Creates a session with an empty buffer and the given filter.
    pub fn with_filter(filter: F) -> Self {
        Self {
            buffer: LineBuffer::new(),
            filter,
        }
    }

    /// Replaces the buffer.
    #[must_use]
    pub fn with_buffer(mut self, buffer: LineBuffer) -> Self {
        self.buffer = buffer;
        self
    }

    /// Returns a reference to the buffer.
    #[must_use]
    pub const fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// Returns a mutable reference to the buffer.
    pub fn buffer_mut(&mut self) -> &mut LineBuffer {
        &mut self.buffer
    }

    /// Returns the filter.
    #[must_use]
    pub const fn filter(&self) -> &F {
        &self.filter
    }

    /// Executes one parsed command.
    ///
    /// # Errors
    ///
    /// Returns an error for unrecognized commands, unreadable or unwritable
    /// files, out-of-range line numbers and failed filters. The buffer is
    /// unchanged whenever an error is returned.
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        debug!(target: SESSION_TARGET, command = command.name(), "executing command");

        match command {
            Command::List => Ok(Outcome::List),
            Command::Load(path) => self.load(&path),
            Command::Save(path) => self.save(&path),
            Command::Edit { line, text } => self.edit(line, text),
            Command::Filter { line, command } => self.filter_line(line, &command),
            Command::Quit => Ok(Outcome::Quit),
            Command::Empty => Ok(Outcome::Continue),
            Command::Unrecognized(raw) => Err(Error::unrecognized(raw)),
        }
    }

    /// Replaces the buffer with the contents of `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read; the buffer is kept.
    pub fn load(&mut self, path: &Path) -> Result<Outcome> {
        let lines = fileio::load(path)?;
        let count = lines.len();
        self.buffer.replace_all(lines);
        info!(target: SESSION_TARGET, path = %path.display(), lines = count, "loaded file");
        Ok(Outcome::Loaded { lines: count })
    }

    /// Writes the buffer to `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<Outcome> {
        let count = fileio::save(path, self.buffer.lines())?;
        info!(target: SESSION_TARGET, path = %path.display(), lines = count, "saved file");
        Ok(Outcome::Saved { lines: count })
    }

    /// Sets or appends 1-based `line`.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error unless `1 <= line <= len + 1`.
    pub fn edit(&mut self, line: usize, text: String) -> Result<Outcome> {
        let size = self.buffer.edit(line, text)?;
        Ok(Outcome::Edited { line, size })
    }

    /// Pipes 1-based `line` through `command`.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error unless `1 <= line <= len`, or a process
    /// error if the filter fails.
    pub fn filter_line(&mut self, line: usize, command: &str) -> Result<Outcome> {
        self.filter.apply(&mut self.buffer, line, command)?;
        Ok(Outcome::Filtered { line })
    }
}
