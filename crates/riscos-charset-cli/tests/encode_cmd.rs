//! Integration tests for the `encode` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("rocharset").unwrap()
}

fn encode(args: &[&str], input: &str) -> Vec<u8> {
    let output = cmd()
        .arg("encode")
        .args(args)
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");
    output.stdout
}

#[test]
fn encodes_latin1_text() {
    assert_eq!(encode(&["-a", "riscos-latin1"], "café…"), b"caf\xe9\x8c");
}

#[test]
fn replace_is_the_default() {
    assert_eq!(encode(&["-a", "riscos-cyrillic"], "Жé"), [0xB6, b'?']);
}

#[test]
fn ignore_drops_unencodable_character() {
    assert_eq!(
        encode(&["-a", "riscos-cyrillic", "--errors", "ignore"], "Жé"),
        [0xB6]
    );
}

#[test]
fn welsh_collision_encodes_to_highest_byte() {
    assert_eq!(encode(&["-a", "110"], "Ŵŵ"), [0xD0, 0xF1]);
}

#[test]
fn strict_reports_character_and_position() {
    cmd()
        .args(["encode", "-a", "riscos-cyrillic", "--errors", "strict"])
        .write_stdin("Жé")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("'é'"))
        .stderr(predicate::str::contains("position 1"));
}

#[test]
fn invalid_utf8_input_fails() {
    cmd()
        .args(["encode", "-a", "riscos-latin1"])
        .write_stdin(vec![b'a', 0xFF])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn utf8_passthrough_encodes_unchanged() {
    assert_eq!(encode(&["-a", "alphabet-111"], "Ŵ€ 🦀"), "Ŵ€ 🦀".as_bytes());
}
