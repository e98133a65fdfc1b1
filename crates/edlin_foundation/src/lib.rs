//! Core types for edlin.
//!
//! This crate provides:
//! - [`LineBuffer`] - The ordered, 1-indexed sequence of lines being edited
//! - [`Error`] - Typed errors for parsing, file I/O, bounds and child processes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod buffer;
pub mod error;

pub use buffer::{LineBuffer, Lines};
pub use error::{Error, ErrorKind, ProcessError, Result, SyntaxError};
