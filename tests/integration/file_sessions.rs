//! Sessions that load and save files.

use std::fs;

use tempfile::TempDir;

use crate::common::{printed, run};

#[test]
fn save_writes_every_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");
    let save = format!("s {}", path.display());

    run(&["e 1 alpha", "e 2 beta", save.as_str()]);
    assert_eq!(fs::read_to_string(&path).unwrap(), "alpha\nbeta\n");
}

#[test]
fn load_replaces_the_buffer() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("in.txt");
    fs::write(&path, "one\ntwo\nthree\n").unwrap();
    let load = format!("r {}", path.display());

    let repl = run(&["e 1 stale", load.as_str(), "l"]);
    assert_eq!(printed(&repl), "     1: one\n     2: two\n     3: three\n");
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("round.txt");
    let save = format!("s {}", path.display());
    let load = format!("r {}", path.display());

    let first = run(&["e 1 first", "e 2   indented", "e 3 last", save.as_str()]);
    let second = run(&[load.as_str()]);
    assert_eq!(second.session().buffer(), first.session().buffer());
}

#[test]
fn missing_file_keeps_the_buffer() {
    let dir = TempDir::new().unwrap();
    let load = format!("r {}", dir.path().join("absent.txt").display());

    let repl = run(&["e 1 survivor", load.as_str(), "l"]);
    assert_eq!(printed(&repl), "     1: survivor\n");
}

#[test]
fn save_to_missing_directory_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    let save = format!("s {}", dir.path().join("nope").join("out.txt").display());

    let repl = run(&["e 1 text", save.as_str(), "l"]);
    assert_eq!(printed(&repl), "     1: text\n");
}

#[test]
fn save_overwrites_an_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "one\ntwo\nthree\nfour\n").unwrap();
    let save = format!("s {}", path.display());

    run(&["e 1 only", save.as_str()]);
    assert_eq!(fs::read_to_string(&path).unwrap(), "only\n");
}

#[test]
fn save_onto_a_directory_fails_and_keeps_it() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("folder");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("inside.txt"), "kept\n").unwrap();
    let save = format!("s {}", target.display());

    let repl = run(&["e 1 text", save.as_str(), "l"]);
    assert_eq!(printed(&repl), "     1: text\n");
    assert_eq!(fs::read_to_string(target.join("inside.txt")).unwrap(), "kept\n");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}
