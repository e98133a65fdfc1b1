//! REPL, session dispatch and file I/O for edlin.
//!
//! This crate provides:
//! - [`Repl`] - The interactive `edlin> ` prompt loop
//! - [`Session`] - Owns the buffer and dispatches parsed commands
//! - [`fileio`] - Newline-delimited load and save
//! - [`EdlinConfig`] - Settings read from `EDLIN_*` environment variables
//! - [`logging`] - `tracing` subscriber installation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod fileio;
pub mod logging;
pub mod repl;
pub mod session;

pub use config::EdlinConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Repl, ReplState};
pub use session::{Outcome, Session};
