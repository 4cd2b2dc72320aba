// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format output.

use std::io;

use termcolor::{ColorSpec, WriteColor};

use super::{ExpandReport, GlobReport, MagicReport, MatchReport, Report, ReportFormatter, WidthReport};
use crate::color::scheme;

/// Human-readable output.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn write(&self, out: &mut dyn WriteColor, report: &Report<'_>) -> io::Result<()> {
        match report {
            Report::Glob(r) => write_glob(out, r),
            Report::Match(r) => write_match(out, r),
            Report::Width(r) => write_width(out, r),
            Report::Expand(r) => write_expand(out, r),
            Report::Magic(r) => write_magic(out, r),
        }
    }
}

fn colored(out: &mut dyn WriteColor, spec: &ColorSpec, text: &str) -> io::Result<()> {
    out.set_color(spec)?;
    write!(out, "{text}")?;
    out.reset()
}

fn field(out: &mut dyn WriteColor, label: &str, spec: &ColorSpec, value: &str) -> io::Result<()> {
    colored(out, &scheme::label(), &format!("{label}: "))?;
    colored(out, spec, value)?;
    writeln!(out)
}

fn write_glob(out: &mut dyn WriteColor, r: &GlobReport) -> io::Result<()> {
    field(out, "pattern", &scheme::pattern(), &r.pattern)?;
    field(out, "regex", &scheme::regex(), &r.regex)?;
    for input in &r.inputs {
        if input.matched {
            colored(out, &scheme::matched(), "match")?;
        } else {
            colored(out, &scheme::unmatched(), "no match")?;
        }
        writeln!(out, "  {}", input.input)?;
    }
    Ok(())
}

fn write_match(out: &mut dyn WriteColor, r: &MatchReport<'_>) -> io::Result<()> {
    let Some(m) = &r.found else {
        colored(out, &scheme::unmatched(), "no match")?;
        return writeln!(out);
    };
    field(out, "start", &scheme::number(), &m.start.to_string())?;
    field(out, "end", &scheme::number(), &m.end.to_string())?;
    field(out, "pre", &scheme::pattern(), m.pre)?;
    field(out, "body", &scheme::matched(), m.body)?;
    field(out, "post", &scheme::pattern(), m.post)
}

fn write_width(out: &mut dyn WriteColor, r: &WidthReport) -> io::Result<()> {
    for row in &r.rows {
        colored(out, &scheme::number(), &row.width.to_string())?;
        writeln!(out, "\t{}", row.text)?;
    }
    if r.rows.len() > 1 {
        colored(out, &scheme::number(), &r.total.to_string())?;
        writeln!(out, "\ttotal")?;
    }
    Ok(())
}

fn write_expand(out: &mut dyn WriteColor, r: &ExpandReport) -> io::Result<()> {
    for expansion in &r.expansions {
        writeln!(out, "{expansion}")?;
    }
    Ok(())
}

fn write_magic(out: &mut dyn WriteColor, r: &MagicReport) -> io::Result<()> {
    field(out, "pattern", &scheme::pattern(), &r.pattern)?;
    let flag = |b: bool| if b { "yes" } else { "no" };
    field(out, "magic", &scheme::number(), flag(r.has_magic))?;
    field(out, "glob", &scheme::number(), flag(r.is_glob))?;
    field(out, "parent", &scheme::regex(), &r.glob_parent)
}
