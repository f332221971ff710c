//! CLI tests for the `textkit` binary.
//!
//! Spawns the binary and checks stdout and exit codes for the demo and
//! single-helper subcommands.

use std::process::{Command, Output};

use textkit::exit_codes;
use textkit::io::config::{TextkitConfig, load_config};
use textkit::test_support::config_file;

fn textkit(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_textkit"))
        .args(args)
        .output()
        .expect("run textkit")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn demo_with_missing_config_uses_defaults() {
    let temp = tempfile::tempdir().expect("tempdir");
    let missing = temp.path().join("absent.toml");
    let output = textkit(&["demo", "--config", missing.to_str().expect("utf8 path")]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let text = stdout(&output);
    assert!(text.starts_with("Iterating over slice:\nIndex: 0, Value: 10\n"));
    assert!(text.contains("Reversed string:\n!dlroW ,olleH\n"));
    assert!(text.contains("Replacing substring:\nHello, Rustacean!\n"));
    assert!(text.contains("Stripping whitespace:\n'Lots of space'\n"));
    assert!(text.contains("Position of 'World' in 'Hello, World!': 7"));
}

#[test]
fn demo_json_contains_every_section() {
    let (_temp, path) = config_file("[strings]\ntext = \"abc\"\n");
    let output = textkit(&["demo", "--json", "--config", path.to_str().expect("utf8 path")]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    let sections = report["sections"].as_array().expect("sections array");
    assert_eq!(sections.len(), 16);
    let reversed = sections
        .iter()
        .find(|section| section["title"] == "Reversed string")
        .expect("reverse section");
    assert_eq!(reversed["lines"][0], "cba");
}

#[test]
fn demo_with_invalid_pattern_exits_with_pattern_code() {
    let (_temp, path) = config_file("[strings]\npattern = \"[oops\"\n");
    let output = textkit(&["demo", "--config", path.to_str().expect("utf8 path")]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID_PATTERN));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid pattern"));
}

#[test]
fn demo_with_malformed_toml_exits_invalid() {
    let (_temp, path) = config_file("[strings\n");
    let output = textkit(&["demo", "--config", path.to_str().expect("utf8 path")]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn reverse_by_code_point_and_grapheme() {
    let output = textkit(&["reverse", "añb🦀"]);
    assert_eq!(stdout(&output), "🦀bña\n");

    let output = textkit(&["reverse", "--graphemes", "e\u{301}x"]);
    assert_eq!(stdout(&output), "xe\u{301}\n");
}

#[test]
fn find_prints_code_point_offset_or_sentinel() {
    assert_eq!(stdout(&textkit(&["find", "Hello, World!", "World"])), "7\n");
    assert_eq!(stdout(&textkit(&["find", "Hello", "xyz"])), "-1\n");
}

#[test]
fn matches_prints_one_per_line() {
    let output = textkit(&["matches", r"\d+", "a1 b22 c333"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "1\n22\n333\n");
}

#[test]
fn matches_with_invalid_pattern_exits_with_pattern_code() {
    let output = textkit(&["matches", "(", "text"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID_PATTERN));
    assert!(output.stdout.is_empty());
}

#[test]
fn words_and_lines_split_differently() {
    assert_eq!(stdout(&textkit(&["words", "  a  b\nc "])), "a\nb\nc\n");
    assert_eq!(stdout(&textkit(&["lines", "a b\nc"])), "a b\nc\n");
}

#[test]
fn init_config_writes_defaults_and_refuses_overwrite() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("textkit.toml");
    let path_arg = path.to_str().expect("utf8 path");

    let output = textkit(&["init-config", path_arg]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(load_config(&path).expect("load"), TextkitConfig::default());

    let output = textkit(&["init-config", path_arg]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));

    let output = textkit(&["init-config", path_arg, "--force"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
}
