// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `scanpat magic`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn magic_reports_glob_parent() {
    Project::empty()
        .cmd()
        .args(["magic", "src/**/*.rs"])
        .assert()
        .success()
        .stdout("pattern: src/**/*.rs\nmagic: yes\nglob: yes\nparent: src\n");
}

#[test]
fn magic_literal_path() {
    let output = Project::empty()
        .cmd()
        .args(["magic", "src/lib.rs", "-o", "json"])
        .output()
        .expect("command should run");
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["has_magic"], false);
    assert_eq!(json["is_glob"], false);
    assert_eq!(json["glob_parent"], "src");
}

/// With `--no-extended` only `*` is magic
#[test]
fn magic_plain_mode() {
    Project::empty()
        .cmd()
        .args(["magic", "a?", "--no-extended"])
        .assert()
        .success()
        .stdout(predicates::str::contains("magic: no"));
}
