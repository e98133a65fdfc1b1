//! External filter commands for edlin.
//!
//! This crate provides:
//! - [`FilterBridge`] - Runs one buffer line through `<shell> -c <command>`
//!   and captures the first line of output
//! - [`LineFilter`] - The seam the session uses, so dispatch can be tested
//!   without spawning processes
//! - [`FilterConfig`] - Shell, timeout, environment and exit status policy
//!
//! The child gets the line on its stdin followed by end-of-input, and only the
//! first line it writes to stdout is kept. Pipes and the child itself are
//! released on every path, including failures.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bridge;
pub mod config;
mod process;
pub mod request;

pub use bridge::{FilterBridge, LineFilter};
pub use config::{EnvironmentPolicy, ErrorOutput, FilterConfig};
pub use request::{FilterOutcome, FilterRequest};
