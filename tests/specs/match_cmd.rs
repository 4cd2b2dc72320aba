// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `scanpat match`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// `{`/`}` over `pre{in{nest}}post` splits around the outer pair
#[test]
fn match_nested_pair() {
    let output = Project::empty()
        .cmd()
        .args(["match", "{", "}", "pre{in{nest}}post", "-o", "json"])
        .output()
        .expect("command should run");
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["match"]["start"], 3);
    assert_eq!(json["match"]["end"], 12);
    assert_eq!(json["match"]["pre"], "pre");
    assert_eq!(json["match"]["body"], "in{nest}");
    assert_eq!(json["match"]["post"], "post");
}

#[test]
fn match_text_output() {
    Project::empty()
        .cmd()
        .args(["match", "(", ")", "f(a(b)c)"])
        .assert()
        .success()
        .stdout(predicates::str::contains("body: a(b)c"));
}

/// No opener means no match, exit 1
#[test]
fn match_without_pair_exits_one() {
    Project::empty()
        .cmd()
        .args(["match", "{", "}", "nothing here"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("no match"));
}

#[test]
fn match_multi_char_markers() {
    Project::empty()
        .cmd()
        .args(["match", "<%", "%>", "a<% b %>c"])
        .assert()
        .success()
        .stdout(predicates::str::contains("body:  b "));
}

#[test]
fn match_regex_markers() {
    Project::empty()
        .cmd()
        .args(["match", r"\{+", r"\}+", "a{{b}}c", "--regex"])
        .assert()
        .success()
        .stdout(predicates::str::contains("post: c"));
}

/// An invalid regex marker is an error, exit 2
#[test]
fn match_invalid_regex_exits_two() {
    Project::empty()
        .cmd()
        .args(["match", "(", ")", "x", "--regex"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid open pattern"));
}
