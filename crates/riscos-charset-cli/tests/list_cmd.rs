//! Integration tests for the `list` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("rocharset").unwrap()
}

#[test]
fn text_lists_every_alphabet() {
    cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("101\triscos-latin1\tISO-8859-1\tc1"))
        .stdout(predicate::str::contains("110\triscos-welsh\tISO-8859-1\tc1,welsh"))
        .stdout(predicate::str::contains("111\triscos-utf8\tUTF-8"))
        .stdout(predicate::str::contains("116\triscos-latin10"));
}

#[test]
fn json_lists_sixteen_alphabets() {
    let output = cmd().args(["list", "--format", "json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 16);
    assert_eq!(entries[0]["number"], 101);
    assert_eq!(entries[0]["name"], "riscos-latin1");
    assert_eq!(entries[10]["name"], "riscos-utf8");
    assert_eq!(entries[10]["layers"], serde_json::json!([]));
}
