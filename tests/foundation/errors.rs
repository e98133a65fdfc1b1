//! Integration tests for Error types
//!
//! Tests error construction, display and error kinds.

use std::io;
use std::time::Duration;

use edlin_foundation::{Error, ErrorKind, ProcessError, SyntaxError};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_io_keeps_path() {
    let err = Error::io("notes.txt", io::Error::new(io::ErrorKind::NotFound, "gone"));
    match &err.kind {
        ErrorKind::Io { path, .. } => assert_eq!(path.to_str(), Some("notes.txt")),
        other => panic!("unexpected kind {other:?}"),
    }
}

#[test]
fn error_config_names_key() {
    let err = Error::config("EDLIN_SHELL", "must not be empty");
    assert_eq!(err.to_string(), "invalid EDLIN_SHELL: must not be empty");
}

#[test]
fn error_from_kind() {
    let err: Error = ErrorKind::UnrecognizedCommand("zz".into()).into();
    assert!(matches!(err.kind, ErrorKind::UnrecognizedCommand(_)));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn syntax_errors_display() {
    let cases = [
        (
            SyntaxError::MissingSeparator { tag: 'r' },
            "`r` must be followed by a single space",
        ),
        (
            SyntaxError::MissingTextSeparator { tag: 'e' },
            "expected a space after the line number in `e`",
        ),
        (
            SyntaxError::InvalidLineNumber { token: "x".into() },
            "invalid line number `x`",
        ),
        (
            SyntaxError::UnexpectedArgument {
                tag: 'l',
                rest: "5".into(),
            },
            "`l` takes no arguments, got `5`",
        ),
    ];
    for (err, expected) in cases {
        assert_eq!(err.to_string(), expected);
    }
}

#[test]
fn process_errors_display_command() {
    let err: Error = ProcessError::NoOutput {
        command: "true".into(),
    }
    .into();
    assert_eq!(err.to_string(), "filter failed: `true` produced no output");

    let err: Error = ProcessError::TimedOut {
        command: "sleep 9".into(),
        timeout: Duration::from_secs(2),
    }
    .into();
    assert!(err.to_string().contains("timed out after 2s"));
}

#[test]
fn spawn_error_names_shell() {
    let err = ProcessError::Spawn {
        shell: "/missing/sh".into(),
        source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    };
    assert!(err.to_string().starts_with("cannot start `/missing/sh`"));
}

#[test]
fn command_errors_are_not_fatal() {
    let errors = [
        Error::from(SyntaxError::MissingSeparator { tag: 's' }),
        Error::out_of_range(9, 1),
        Error::unrecognized("x"),
        Error::from(ProcessError::PipeUnavailable { stream: "stdout" }),
    ];
    assert!(errors.iter().all(|err| !err.is_fatal()));
    assert!(Error::terminal("closed").is_fatal());
}
