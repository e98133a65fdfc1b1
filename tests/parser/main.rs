//! Integration tests for the command parser
//!
//! Tests prompt syntax through the public `CommandParser` API.

mod command_tests;
