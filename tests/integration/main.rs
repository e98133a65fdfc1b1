//! Integration tests for full edlin sessions
//!
//! Drives the REPL with scripted input and checks what it prints and what the
//! buffer holds afterwards.

mod config_tests;
mod editing_sessions;
mod file_sessions;
#[cfg(unix)]
mod filter_sessions;
