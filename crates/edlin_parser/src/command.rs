//! Parsed prompt commands.

use std::fmt;
use std::path::PathBuf;

/// One command entered at the prompt.
///
/// Produced fresh for every input line and consumed once by the dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `l`: print the buffer.
    List,
    /// `r <path>`: replace the buffer with the contents of a file.
    Load(PathBuf),
    /// `s <path>`: write the buffer to a file.
    Save(PathBuf),
    /// `e <n> <text>`: overwrite or append a line.
    Edit {
        /// 1-based line number.
        line: usize,
        /// The new text, verbatim.
        text: String,
    },
    /// `! <n> <command>`: pipe a line through a shell command.
    Filter {
        /// 1-based line number.
        line: usize,
        /// The shell command string.
        command: String,
    },
    /// `q`: end the session.
    Quit,
    /// A blank line.
    Empty,
    /// Anything that does not start with a known tag.
    Unrecognized(String),
}

impl Command {
    /// Returns a short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Load(_) => "load",
            Self::Save(_) => "save",
            Self::Edit { .. } => "edit",
            Self::Filter { .. } => "filter",
            Self::Quit => "quit",
            Self::Empty => "empty",
            Self::Unrecognized(_) => "unrecognized",
        }
    }
}

/// Renders the command back in prompt syntax.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "l"),
            Self::Load(path) => write!(f, "r {}", path.display()),
            Self::Save(path) => write!(f, "s {}", path.display()),
            Self::Edit { line, text } => write!(f, "e {line} {text}"),
            Self::Filter { line, command } => write!(f, "! {line} {command}"),
            Self::Quit => write!(f, "q"),
            Self::Empty => Ok(()),
            Self::Unrecognized(raw) => write!(f, "{raw}"),
        }
    }
}
