// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `scanpat glob`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// Matching and exit codes
// =============================================================================

/// `*.js` without extended syntax matches `a.js` and exits 0
#[test]
fn glob_matching_input_exits_zero() {
    Project::empty()
        .cmd()
        .args(["glob", "*.js", "a.js", "--no-extended"])
        .assert()
        .success()
        .stdout(predicates::str::contains(r"regex: ^.*\.js$"))
        .stdout(predicates::str::contains("match  a.js"));
}

/// Any input failing to match exits 1
#[test]
fn glob_failing_input_exits_one() {
    Project::empty()
        .cmd()
        .args(["glob", "*.js", "a.js", "a.ts"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("no match  a.ts"));
}

/// Without inputs the regex is printed and the command succeeds
#[test]
fn glob_without_inputs_prints_regex() {
    Project::empty()
        .cmd()
        .args(["glob", "{a,b}?"])
        .assert()
        .success()
        .stdout(predicates::str::contains("regex: ^(a|b).$"));
}

#[test]
fn glob_globstar_crosses_directories() {
    Project::empty()
        .cmd()
        .args(["glob", "src/**/*.rs", "src/a/b/c.rs", "src/c.rs", "--globstar"])
        .assert()
        .success();
}

#[test]
fn glob_ignore_case() {
    Project::empty()
        .cmd()
        .args(["glob", "*.RS", "lib.rs", "-i"])
        .assert()
        .success();
}

// =============================================================================
// Unmatched delimiters
// =============================================================================

/// Unclosed `[` is a literal by default
#[test]
fn glob_unclosed_bracket_is_literal() {
    Project::empty()
        .cmd()
        .args(["glob", "file[1", "file[1"])
        .assert()
        .success();
}

/// `--unmatched error` turns an unclosed `[` into an error, exit 2
#[test]
fn glob_strict_unclosed_bracket_fails() {
    Project::empty()
        .cmd()
        .args(["glob", "file[1", "--unmatched", "error"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unbalanced bracket at offset 4"));
}

/// Ignored delimiters are reported at warn level on stderr
#[test]
fn glob_unclosed_bracket_logs_warning() {
    Project::empty()
        .cmd()
        .args(["glob", "a{b"])
        .assert()
        .success()
        .stderr(predicates::str::contains("treating it as a literal"));
}

/// Thousands of unclosed openers compile and log a single warning
#[test]
fn glob_many_unclosed_braces_warn_once() {
    let pattern = "{".repeat(20_000);
    let output = Project::empty()
        .cmd()
        .args(["glob", &pattern])
        .output()
        .expect("command should run");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 1, "stderr: {stderr}");
    assert!(stderr.contains("20000 unclosed in total"));
}

/// An escaped `-` in a class is a member, not a range
#[test]
fn glob_escaped_dash_in_class() {
    Project::empty()
        .cmd()
        .args(["glob", r"[a\-z]", "-"])
        .assert()
        .success();
    Project::empty()
        .cmd()
        .args(["glob", r"[a\-z]", "m"])
        .assert()
        .code(1);
}

// =============================================================================
// JSON output
// =============================================================================

#[test]
fn glob_json_output() {
    let output = Project::empty()
        .cmd()
        .args(["glob", "*.js", "a.js", "b.ts", "-o", "json"])
        .output()
        .expect("command should run");
    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert_eq!(json["command"], "glob");
    assert_eq!(json["pattern"], "*.js");
    assert_eq!(json["inputs"][0]["matched"], true);
    assert_eq!(json["inputs"][1]["matched"], false);
}
