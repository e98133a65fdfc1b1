//! Tests for well-formed commands.

use std::path::PathBuf;

use edlin_parser::{Command, CommandParser};

fn parse(input: &str) -> Command {
    CommandParser::parse(input).unwrap()
}

// =============================================================================
// Simple Commands
// =============================================================================

#[test]
fn list_and_quit() {
    assert_eq!(parse("l"), Command::List);
    assert_eq!(parse("q"), Command::Quit);
    assert_eq!(parse("  l  "), Command::List);
    assert_eq!(parse("q\n"), Command::Quit);
}

#[test]
fn blank_input_is_empty() {
    assert_eq!(parse(""), Command::Empty);
    assert_eq!(parse("\n"), Command::Empty);
    assert_eq!(parse(" \t "), Command::Empty);
}

// =============================================================================
// File Commands
// =============================================================================

#[test]
fn load_and_save_take_a_path() {
    assert_eq!(parse("r notes.txt"), Command::Load(PathBuf::from("notes.txt")));
    assert_eq!(parse("s /tmp/out.txt\r\n"), Command::Save(PathBuf::from("/tmp/out.txt")));
}

#[test]
fn path_ignores_trailing_tokens() {
    assert_eq!(parse("r a.txt b.txt"), Command::Load(PathBuf::from("a.txt")));
}

// =============================================================================
// Numbered Commands
// =============================================================================

#[test]
fn edit_keeps_text_verbatim() {
    assert_eq!(
        parse("e 3   padded  text  "),
        Command::Edit {
            line: 3,
            text: "  padded  text  ".to_string(),
        }
    );
}

#[test]
fn edit_accepts_the_append_slot() {
    assert_eq!(
        parse("e 1 first line"),
        Command::Edit {
            line: 1,
            text: "first line".to_string(),
        }
    );
}

#[test]
fn filter_keeps_shell_syntax() {
    assert_eq!(
        parse("! 2 tr a-z A-Z | sed 's/X/y/'"),
        Command::Filter {
            line: 2,
            command: "tr a-z A-Z | sed 's/X/y/'".to_string(),
        }
    );
}

#[test]
fn display_reparses_to_the_same_command() {
    for input in ["l", "q", "r in.txt", "s out.txt", "e 7 some text", "! 1 wc -c"] {
        let command = parse(input);
        assert_eq!(parse(&command.to_string()), command, "input {input:?}");
    }
}

// =============================================================================
// Unrecognized Input
// =============================================================================

#[test]
fn unknown_tag_keeps_raw_line() {
    assert_eq!(parse("x foo"), Command::Unrecognized("x foo".to_string()));
    assert_eq!(parse("  zap\n"), Command::Unrecognized("  zap".to_string()));
}

#[test]
fn tags_are_case_sensitive() {
    assert!(matches!(parse("L"), Command::Unrecognized(_)));
    assert!(matches!(parse("Q"), Command::Unrecognized(_)));
}
