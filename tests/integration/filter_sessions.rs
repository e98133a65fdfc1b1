//! Sessions that run `!` filters through the shell.

use crate::common::{printed, run};

#[test]
fn filter_uppercases_one_line() {
    let repl = run(&["e 1 hello", "e 2 world", "! 1 tr a-z A-Z", "l"]);
    assert_eq!(printed(&repl), "     1: HELLO\n     2: world\n");
}

#[test]
fn filter_keeps_only_first_output_line() {
    let repl = run(&["e 1 x", "! 1 printf 'a\\nb\\n'", "l"]);
    assert_eq!(printed(&repl), "     1: a\n");
}

#[test]
fn failing_filter_leaves_line() {
    let repl = run(&["e 1 original", "! 1 true", "! 1 no-such-command-here", "l"]);
    assert_eq!(printed(&repl), "     1: original\n");
}

#[test]
fn filter_past_the_end_is_rejected() {
    let repl = run(&["e 1 only", "! 2 cat", "l"]);
    assert_eq!(printed(&repl), "     1: only\n");
}

#[test]
fn filters_compose_across_commands() {
    let repl = run(&["e 1 abc", "! 1 sed s/b/x/", "! 1 tr a-z A-Z", "l"]);
    assert_eq!(printed(&repl), "     1: AXC\n");
}
