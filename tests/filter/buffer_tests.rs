//! Tests for applying filters to a buffer.

use edlin_filter::{ErrorOutput, FilterBridge, FilterConfig, LineFilter};
use edlin_foundation::{ErrorKind, LineBuffer};

fn bridge() -> FilterBridge {
    FilterBridge::new(FilterConfig::default().with_stderr(ErrorOutput::Discard))
}

#[test]
fn apply_replaces_only_the_addressed_line() {
    let mut buffer = LineBuffer::from_lines(["keep", "change me", "keep"]);
    let outcome = bridge().apply(&mut buffer, 2, "tr a-z A-Z").unwrap();

    assert_eq!(outcome.text, "CHANGE ME");
    assert_eq!(buffer.lines(), ["keep", "CHANGE ME", "keep"]);
}

#[test]
fn apply_out_of_range_leaves_buffer() {
    let mut buffer = LineBuffer::from_lines(["only"]);
    let err = bridge().apply(&mut buffer, 2, "cat").unwrap_err();

    assert!(matches!(err.kind, ErrorKind::OutOfRange { line: 2, max: 1 }));
    assert_eq!(buffer.lines(), ["only"]);
}

#[test]
fn apply_failure_leaves_buffer() {
    let mut buffer = LineBuffer::from_lines(["only"]);
    let err = bridge().apply(&mut buffer, 1, "true").unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Process(_)));
    assert_eq!(buffer.lines(), ["only"]);
}

#[test]
fn apply_to_empty_buffer_is_out_of_range() {
    let mut buffer = LineBuffer::new();
    let err = bridge().apply(&mut buffer, 1, "cat").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::OutOfRange { line: 1, max: 0 }));
}
