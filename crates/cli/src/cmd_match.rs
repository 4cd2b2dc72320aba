// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match command implementation.

use anyhow::Context;
use regex::Regex;
use termcolor::WriteColor;

use scanpat::balanced::{balanced, balanced_regex};
use scanpat::cli::{MatchArgs, OutputFormat};
use scanpat::report::{self, MatchReport, Report};

/// Find the first balanced pair. False if there is none.
pub fn run(args: &MatchArgs, out: &mut dyn WriteColor, format: OutputFormat) -> anyhow::Result<bool> {
    let found = if args.regex {
        let open = Regex::new(&args.open).with_context(|| format!("invalid open pattern {:?}", args.open))?;
        let close = Regex::new(&args.close).with_context(|| format!("invalid close pattern {:?}", args.close))?;
        balanced_regex(&open, &close, &args.input)
    } else {
        balanced(&args.open, &args.close, &args.input)
    };

    let ok = found.is_some();
    let report = Report::Match(MatchReport {
        open: &args.open,
        close: &args.close,
        found,
    });
    report::write_report(out, format, &report)?;
    Ok(ok)
}
