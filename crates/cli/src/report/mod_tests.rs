#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use termcolor::{Ansi, NoColor};

use super::*;
use crate::balanced::balanced;

fn render(format: OutputFormat, report: &Report<'_>) -> String {
    let mut out = NoColor::new(Vec::new());
    write_report(&mut out, format, report).unwrap();
    String::from_utf8(out.into_inner()).unwrap()
}

fn glob_report() -> Report<'static> {
    Report::Glob(GlobReport {
        pattern: "*.js".to_string(),
        regex: r"^.*\.js$".to_string(),
        inputs: vec![
            InputMatch {
                input: "a.js".to_string(),
                matched: true,
            },
            InputMatch {
                input: "a.ts".to_string(),
                matched: false,
            },
        ],
    })
}

#[test]
fn glob_text() {
    similar_asserts::assert_eq!(
        render(OutputFormat::Text, &glob_report()),
        "pattern: *.js\nregex: ^.*\\.js$\nmatch  a.js\nno match  a.ts\n"
    );
}

#[test]
fn glob_json_is_tagged() {
    let json: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json, &glob_report())).unwrap();
    assert_eq!(json["command"], "glob");
    assert_eq!(json["regex"], r"^.*\.js$");
    assert_eq!(json["inputs"][1]["matched"], false);
}

#[test]
fn match_text_and_json() {
    let report = Report::Match(MatchReport {
        open: "{",
        close: "}",
        found: balanced("{", "}", "pre{in{nest}}post"),
    });
    similar_asserts::assert_eq!(
        render(OutputFormat::Text, &report),
        "start: 3\nend: 12\npre: pre\nbody: in{nest}\npost: post\n"
    );
    let json: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json, &report)).unwrap();
    assert_eq!(json["match"]["end"], 12);
    assert_eq!(json["match"]["body"], "in{nest}");
}

#[test]
fn no_match_text_and_json() {
    let report = Report::Match(MatchReport {
        open: "{",
        close: "}",
        found: None,
    });
    similar_asserts::assert_eq!(render(OutputFormat::Text, &report), "no match\n");
    let json: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json, &report)).unwrap();
    assert!(json["match"].is_null());
}

#[test]
fn width_text_shows_total_for_several_rows() {
    let report = Report::Width(WidthReport {
        rows: vec![
            WidthRow {
                text: "A".to_string(),
                width: 1,
            },
            WidthRow {
                text: "世".to_string(),
                width: 2,
            },
        ],
        total: 3,
    });
    similar_asserts::assert_eq!(render(OutputFormat::Text, &report), "1\tA\n2\t世\n3\ttotal\n");
}

#[test]
fn expand_text_is_one_per_line() {
    let report = Report::Expand(ExpandReport {
        pattern: "a{b,c}".to_string(),
        expansions: vec!["ab".to_string(), "ac".to_string()],
    });
    similar_asserts::assert_eq!(render(OutputFormat::Text, &report), "ab\nac\n");
}

#[test]
fn magic_text() {
    let report = Report::Magic(MagicReport {
        pattern: "src/*.rs".to_string(),
        has_magic: true,
        is_glob: true,
        glob_parent: "src".to_string(),
    });
    similar_asserts::assert_eq!(
        render(OutputFormat::Text, &report),
        "pattern: src/*.rs\nmagic: yes\nglob: yes\nparent: src\n"
    );
}

#[test]
fn text_output_is_colored_on_ansi_writers() {
    let mut out = Ansi::new(Vec::new());
    write_report(&mut out, OutputFormat::Text, &glob_report()).unwrap();
    let text = String::from_utf8(out.into_inner()).unwrap();
    assert!(text.contains("\x1b["));
}
