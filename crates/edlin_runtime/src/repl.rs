//! The main REPL implementation.

use std::io::{self, IsTerminal, Stdout, Write};

use edlin_filter::{FilterBridge, LineFilter};
use edlin_foundation::{Error, Result};
use edlin_parser::CommandParser;
use tracing::debug;

use crate::config::EdlinConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::{Outcome, Session};

/// Tracing target for the prompt loop.
const REPL_TARGET: &str = "edlin_runtime::repl";

/// Where the prompt loop stands after an iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplState {
    /// Prompt again.
    Running,
    /// Quit or end of input.
    Terminated,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = Stdout, F: LineFilter = FilterBridge> {
    /// The line editor for input.
    editor: E,

    /// Buffer and filter.
    session: Session<F>,

    /// Sink for listings and messages.
    out: W,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the rustyline editor, writing to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(config: &EdlinConfig) -> Result<Self> {
        let editor = RustylineEditor::new(config.history_size)?;
        let repl = Repl::with_editor(editor)
            .with_session(Session::with_filter(FilterBridge::new(config.filter.clone())))
            .with_prompt(config.prompt.clone());
        Ok(if config.banner {
            repl
        } else {
            repl.without_banner()
        })
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor, writing to stdout.
    pub fn with_editor(editor: E) -> Self {
        Self::with_output(editor, io::stdout())
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    /// Creates a new REPL with the given editor and output sink.
    pub fn with_output(editor: E, out: W) -> Self {
        Self {
            editor,
            session: Session::new(),
            out,
            show_banner: true,
            prompt: crate::config::DEFAULT_PROMPT.to_string(),
        }
    }
}

impl<E: LineEditor, W: Write, F: LineFilter> Repl<E, W, F> {
    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session<G: LineFilter>(self, session: Session<G>) -> Repl<E, W, G> {
        Repl {
            editor: self.editor,
            session,
            out: self.out,
            show_banner: self.show_banner,
            prompt: self.prompt,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session<F> {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session<F> {
        &mut self.session
    }

    /// Returns the output sink.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Runs the REPL loop until `q` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if the terminal or the output sink fails.
    /// Command errors are printed and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner()?;
        }

        loop {
            match self.read_eval_print() {
                Ok(ReplState::Running) => {}
                Ok(ReplState::Terminated) => break,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => self.print_error(&e),
            }
        }

        Ok(())
    }

    /// Executes one read-eval-print iteration.
    fn read_eval_print(&mut self) -> Result<ReplState> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(ReplState::Running),
            ReadResult::Eof => {
                debug!(target: REPL_TARGET, "end of input");
                return Ok(ReplState::Terminated);
            }
        };

        if !input.trim().is_empty() {
            self.editor.add_history(&input);
        }

        self.eval(&input)
    }

    /// Parses and executes one line of input, printing any output.
    ///
    /// # Errors
    ///
    /// Returns parse errors, command errors, and output failures.
    pub fn eval(&mut self, input: &str) -> Result<ReplState> {
        let command = CommandParser::parse(input)?;
        let outcome = self.session.execute(command)?;

        match outcome {
            Outcome::List => {
                for (number, text) in self.session.buffer().list() {
                    writeln!(self.out, "{number:>6}: {text}").map_err(output_error)?;
                }
                Ok(ReplState::Running)
            }
            Outcome::Quit => {
                writeln!(self.out, "Exiting the editor").map_err(output_error)?;
                Ok(ReplState::Terminated)
            }
            Outcome::Continue
            | Outcome::Loaded { .. }
            | Outcome::Saved { .. }
            | Outcome::Edited { .. }
            | Outcome::Filtered { .. } => Ok(ReplState::Running),
        }
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        if io::stderr().is_terminal() {
            eprintln!("\x1b[31mError: {error}\x1b[0m");
        } else {
            eprintln!("Error: {error}");
        }
    }

    /// Prints the welcome banner.
    fn print_banner(&mut self) -> Result<()> {
        writeln!(self.out, "Line Editor - Unix Edition").map_err(output_error)?;
        self.out.flush().map_err(output_error)
    }
}

fn output_error(err: io::Error) -> Error {
    Error::terminal(format!("cannot write output: {err}"))
}
