// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `scanpat width`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn width_of_arguments() {
    let output = Project::empty()
        .cmd()
        .args(["width", "A", "世", "A世", "-o", "json"])
        .output()
        .expect("command should run");
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["rows"][0]["width"], 1);
    assert_eq!(json["rows"][1]["width"], 2);
    assert_eq!(json["rows"][2]["width"], 3);
    assert_eq!(json["total"], 6);
}

#[test]
fn width_text_output() {
    Project::empty()
        .cmd()
        .args(["width", "こんにちは"])
        .assert()
        .success()
        .stdout("10\tこんにちは\n");
}

/// Ambiguous characters are wide unless asked otherwise
#[test]
fn width_ambiguous_flag() {
    Project::empty()
        .cmd()
        .args(["width", "±"])
        .assert()
        .stdout(predicates::str::starts_with("2\t"));
    Project::empty()
        .cmd()
        .args(["width", "±", "--ambiguous", "narrow"])
        .assert()
        .stdout(predicates::str::starts_with("1\t"));
}

/// `[width] ambiguous = "narrow"` in config applies without flags
#[test]
fn width_ambiguous_from_config() {
    Project::with_config("version = 1\n[width]\nambiguous = \"narrow\"\n")
        .cmd()
        .args(["width", "α"])
        .assert()
        .stdout(predicates::str::starts_with("1\t"));
}

/// Combining marks take no columns
#[test]
fn width_ignores_combining_marks() {
    Project::empty()
        .cmd()
        .args(["width", "\u{0915}\u{094D}"])
        .assert()
        .success()
        .stdout(predicates::str::starts_with("1\t"));
}

#[test]
fn width_of_file_lines() {
    let project = Project::empty();
    let path = project.file("input.txt", "ab\n世界\n");
    project
        .cmd()
        .args(["width", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("2\tab\n4\t世界\n6\ttotal\n");
}

#[test]
fn width_of_stdin_lines() {
    assert_cmd::Command::from_std(Project::empty().cmd())
        .arg("width")
        .write_stdin("abc\n")
        .assert()
        .success()
        .stdout("3\tabc\n");
}

#[test]
fn width_of_missing_file_exits_two() {
    Project::empty()
        .cmd()
        .args(["width", "--file", "missing.txt"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to read missing.txt"));
}
