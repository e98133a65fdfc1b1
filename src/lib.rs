//! edlin - line-numbered text buffer editor
//!
//! This crate re-exports all layers of edlin for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: edlin_runtime    - REPL, session dispatch, file I/O, CLI
//! Layer 1: edlin_parser     - Prompt command parsing
//!          edlin_filter     - External filter subprocess bridge
//! Layer 0: edlin_foundation - Line buffer and error types
//! ```

pub use edlin_filter as filter;
pub use edlin_foundation as foundation;
pub use edlin_parser as parser;
pub use edlin_runtime as runtime;
