//! Golden tests for xmlinline
//!
//! The fixture mission under tests/fixtures/mission is inlined and compared
//! line by line with expected.xml. This pins:
//! - Append-then-remove placement of included roots
//! - Windows-style include paths
//! - Indentation and empty-element output

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn mission_dir() -> PathBuf {
    fixtures_dir().join("mission")
}

/// Create a command for running the xmlinline binary
fn xmlinline_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("xmlinline"))
}

#[test]
fn golden_mission_matches_expected() {
    let temp = tempdir().unwrap();
    let output = temp.path().join("economy.xml");

    xmlinline_cmd()
        .arg(mission_dir().join("cfgeconomycore.xml"))
        .arg(&output)
        .assert()
        .success();

    let actual = fs::read_to_string(&output).unwrap();
    let expected = fs::read_to_string(mission_dir().join("expected.xml")).unwrap();

    let mut actual_lines = actual.lines();
    let declaration = actual_lines.next().expect("declaration line");
    assert!(
        declaration.starts_with("<?xml version=\"1.0\""),
        "unexpected declaration: {}",
        declaration
    );
    assert!(declaration.contains("utf-8"));

    let actual_body: Vec<_> = actual_lines.collect();
    let expected_body: Vec<_> = expected.lines().collect();
    assert_eq!(actual_body, expected_body);
}

#[test]
fn golden_output_is_stable_when_reinlined() {
    let temp = tempdir().unwrap();
    let first = temp.path().join("first.xml");
    let second = temp.path().join("second.xml");

    xmlinline_cmd()
        .arg(mission_dir().join("cfgeconomycore.xml"))
        .arg(&first)
        .assert()
        .success();

    // No includes remain, so a second pass only re-indents
    xmlinline_cmd().arg(&first).arg(&second).assert().success();

    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );
}
