// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `scanpat expand`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn expand_prints_one_per_line() {
    Project::empty()
        .cmd()
        .args(["expand", "{a,{b,c}}"])
        .assert()
        .success()
        .stdout("a\nb\nc\n");
}

#[test]
fn expand_sequences() {
    Project::empty()
        .cmd()
        .args(["expand", "file{01..03}.txt"])
        .assert()
        .success()
        .stdout("file01.txt\nfile02.txt\nfile03.txt\n");
}

/// Exceeding `--max` is an error, exit 2
#[test]
fn expand_over_limit_exits_two() {
    Project::empty()
        .cmd()
        .args(["expand", "{1..100}", "--max", "10"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("exceeded 10 results"));
}

/// `[expand] max` in config applies without flags
#[test]
fn expand_limit_from_config() {
    Project::with_config("version = 1\n[expand]\nmax = 2\n")
        .cmd()
        .args(["expand", "{a,b,c}"])
        .assert()
        .code(2);
}

#[test]
fn expand_json_output() {
    let output = Project::empty()
        .cmd()
        .args(["expand", "a{b,c}", "-o", "json"])
        .output()
        .expect("command should run");
    let json = stdout_json(&output);
    assert_eq!(json["command"], "expand");
    assert_eq!(json["expansions"], serde_json::json!(["ab", "ac"]));
}
