// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for configuration.
//!
//! Tests that scanpat correctly handles:
//! - Config file validation
//! - Lookup via flag, environment and working directory
//! - Log filtering

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// Validation
// =============================================================================

/// > Unknown keys are errors
#[test]
fn unknown_config_key_fails() {
    Project::with_config("version = 1\nunknown_key = true\n")
        .cmd()
        .args(["glob", "a"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown field"));
}

/// > Unknown nested keys are errors
#[test]
fn unknown_nested_config_key_fails() {
    Project::with_config(&format!("{MINIMAL_CONFIG}[glob]\nstar = true\n"))
        .cmd()
        .args(["glob", "a"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown field"));
}

#[test]
fn unsupported_version_fails() {
    Project::with_config("version = 7\n")
        .cmd()
        .args(["glob", "a"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 7"));
}

#[test]
fn valid_config_succeeds() {
    Project::with_config(MINIMAL_CONFIG)
        .cmd()
        .args(["glob", "a", "a"])
        .assert()
        .success();
}

// =============================================================================
// Lookup
// =============================================================================

/// `[glob] extended = false` makes `?` literal
#[test]
fn working_directory_config_applies() {
    Project::with_config("version = 1\n[glob]\nextended = false\n")
        .cmd()
        .args(["glob", "a?"])
        .assert()
        .stdout(predicates::str::contains(r"regex: ^a\?$"));
}

#[test]
fn config_flag_overrides_working_directory() {
    let project = Project::with_config("version = 1\nbogus = 1\n");
    let other = project.file("other.toml", "version = 1\n[glob]\nglobstar = true\n");
    project
        .cmd()
        .arg("-C")
        .arg(&other)
        .args(["glob", "*"])
        .assert()
        .success()
        .stdout(predicates::str::contains("([^/]*)"));
}

#[test]
fn config_env_var_is_used() {
    let project = Project::empty();
    let path = project.file("env.toml", "version = 1\n[glob]\nanchored = false\n");
    project
        .cmd()
        .env("SCANPAT_CONFIG", &path)
        .args(["glob", "b"])
        .assert()
        .success()
        .stdout(predicates::str::contains("regex: b\n"));
}

#[test]
fn missing_explicit_config_fails() {
    Project::empty()
        .cmd()
        .args(["-C", "nope.toml", "glob", "a"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("nope.toml"));
}

// =============================================================================
// Logging
// =============================================================================

/// `--verbose` shows debug logs on stderr
#[test]
fn verbose_logs_compiled_glob() {
    Project::empty()
        .cmd()
        .args(["glob", "*.rs", "-v"])
        .assert()
        .success()
        .stderr(predicates::str::contains("compiled glob"));
}

/// `SCANPAT_LOG=off` silences warnings
#[test]
fn log_filter_from_environment() {
    Project::empty()
        .cmd()
        .env("SCANPAT_LOG", "off")
        .args(["glob", "a{b"])
        .assert()
        .success()
        .stderr(predicates::str::is_empty());
}
