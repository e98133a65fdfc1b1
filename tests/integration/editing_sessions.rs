//! Sessions that only edit and list.

use edlin::foundation::ErrorKind;
use edlin::runtime::ReplState;

use crate::common::{printed, repl, run};

#[test]
fn edit_append_and_list() {
    let repl = run(&["e 1 first", "e 2 second", "e 1 FIRST", "l"]);
    assert_eq!(printed(&repl), "     1: FIRST\n     2: second\n");
}

#[test]
fn listing_an_empty_buffer_prints_nothing() {
    let repl = run(&["l"]);
    assert_eq!(printed(&repl), "");
}

#[test]
fn line_numbers_are_right_aligned() {
    let script: Vec<String> = (1..=10).map(|n| format!("e {n} line {n}")).collect();
    let mut lines: Vec<&str> = script.iter().map(String::as_str).collect();
    lines.push("l");

    let repl = run(&lines);
    let output = printed(&repl);
    assert!(output.starts_with("     1: line 1\n"));
    assert!(output.ends_with("    10: line 10\n"));
}

#[test]
fn quit_prints_farewell_and_stops() {
    let repl = run(&["e 1 kept", "q", "e 2 dropped"]);
    assert_eq!(printed(&repl), "Exiting the editor\n");
    assert_eq!(repl.session().buffer().lines(), ["kept"]);
}

#[test]
fn end_of_input_ends_like_quit_without_message() {
    let repl = run(&["e 1 kept"]);
    assert_eq!(printed(&repl), "");
    assert_eq!(repl.session().buffer().len(), 1);
}

#[test]
fn bad_commands_are_survivable() {
    let repl = run(&["e", "x foo", "r5", "e 9 gap", "e 0 zero", "l 1", "e 1 ok", "l"]);
    assert_eq!(printed(&repl), "     1: ok\n");
}

#[test]
fn eval_reports_each_error_kind() {
    let mut repl = repl(&[]);

    let err = repl.eval("e").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Parse(_)));

    let err = repl.eval("x foo").unwrap_err();
    assert_eq!(err.to_string(), "unrecognized command: x foo");

    let err = repl.eval("e 2 too far").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::OutOfRange { line: 2, max: 1 }));

    assert_eq!(repl.eval("").unwrap(), ReplState::Running);
    assert_eq!(repl.eval("q").unwrap(), ReplState::Terminated);
}

#[test]
fn banner_and_prompt() {
    use crate::common::ScriptedEditor;
    use edlin::runtime::Repl;

    let mut repl = Repl::with_output(ScriptedEditor::new(&["q"]), Vec::new());
    repl.run().unwrap();
    assert_eq!(
        String::from_utf8(repl.output().clone()).unwrap(),
        "Line Editor - Unix Edition\nExiting the editor\n"
    );
}
