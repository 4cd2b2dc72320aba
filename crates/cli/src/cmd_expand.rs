// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expand command implementation.

use anyhow::Context;
use termcolor::WriteColor;

use scanpat::cli::{ExpandArgs, OutputFormat};
use scanpat::config::Config;
use scanpat::glob::expand;
use scanpat::report::{self, ExpandReport, Report};

pub fn run(args: &ExpandArgs, config: &Config, out: &mut dyn WriteColor, format: OutputFormat) -> anyhow::Result<bool> {
    let expansions = expand(&args.pattern, &args.options(config))
        .with_context(|| format!("cannot expand {:?}", args.pattern))?;
    let report = Report::Expand(ExpandReport {
        pattern: args.pattern.clone(),
        expansions,
    });
    report::write_report(out, format, &report)?;
    Ok(true)
}
