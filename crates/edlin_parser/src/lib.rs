//! Command parsing for the edlin prompt.
//!
//! Turns one line of user input into exactly one [`Command`]:
//!
//! ```text
//! "e 3 hello"  -> Command::Edit { line: 3, text: "hello" }
//! "! 1 tr a-z A-Z" -> Command::Filter { line: 1, command: "tr a-z A-Z" }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod parser;
pub mod tokenizer;


pub use command::Command;
pub use parser::CommandParser;
pub use tokenizer::Scanner;
