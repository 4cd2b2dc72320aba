// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command output.
//!
//! Each command builds a [`Report`] and hands it to the formatter chosen by
//! `--output`.

mod json;
mod text;

use std::io;

use serde::Serialize;
use termcolor::WriteColor;

use crate::balanced::BalancedMatch;
use crate::cli::OutputFormat;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Result of `scanpat glob`.
#[derive(Debug, Serialize)]
pub struct GlobReport {
    pub pattern: String,
    pub regex: String,
    pub inputs: Vec<InputMatch>,
}

#[derive(Debug, Serialize)]
pub struct InputMatch {
    pub input: String,
    pub matched: bool,
}

/// Result of `scanpat match`.
#[derive(Debug, Serialize)]
pub struct MatchReport<'a> {
    pub open: &'a str,
    pub close: &'a str,
    #[serde(rename = "match")]
    pub found: Option<BalancedMatch<'a>>,
}

/// Result of `scanpat width`.
#[derive(Debug, Serialize)]
pub struct WidthReport {
    pub rows: Vec<WidthRow>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct WidthRow {
    pub text: String,
    pub width: usize,
}

/// Result of `scanpat expand`.
#[derive(Debug, Serialize)]
pub struct ExpandReport {
    pub pattern: String,
    pub expansions: Vec<String>,
}

/// Result of `scanpat magic`.
#[derive(Debug, Serialize)]
pub struct MagicReport {
    pub pattern: String,
    pub has_magic: bool,
    pub is_glob: bool,
    pub glob_parent: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Report<'a> {
    Glob(GlobReport),
    Match(MatchReport<'a>),
    Width(WidthReport),
    Expand(ExpandReport),
    Magic(MagicReport),
}

/// Formats a [`Report`] onto a color-capable writer.
pub trait ReportFormatter {
    fn write(&self, out: &mut dyn WriteColor, report: &Report<'_>) -> io::Result<()>;
}

/// Write `report` in `format`.
pub fn write_report(out: &mut dyn WriteColor, format: OutputFormat, report: &Report<'_>) -> io::Result<()> {
    match format {
        OutputFormat::Text => TextFormatter.write(out, report),
        OutputFormat::Json => JsonFormatter.write(out, report),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
