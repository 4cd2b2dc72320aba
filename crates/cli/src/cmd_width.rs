// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Width command implementation.

use std::io::Read;

use anyhow::Context;
use termcolor::WriteColor;

use scanpat::cli::{OutputFormat, WidthArgs};
use scanpat::config::Config;
use scanpat::input;
use scanpat::report::{self, Report, WidthReport, WidthRow};
use scanpat::width::{WidthOptions, width_with};

/// Measure each TEXT argument, each line of `--file`, or each line of stdin.
pub fn run(args: &WidthArgs, config: &Config, out: &mut dyn WriteColor, format: OutputFormat) -> anyhow::Result<bool> {
    let options = args.options(config);

    let rows = if let Some(path) = &args.file {
        let content = input::read_text(path)?;
        let text = content
            .as_str()
            .with_context(|| format!("{} is not valid UTF-8", path.display()))?;
        measure_lines(text, &options)
    } else if args.text.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        measure_lines(&text, &options)
    } else {
        args.text.iter().map(|t| measure(t, &options)).collect()
    };

    let total = rows.iter().map(|r| r.width).sum();
    report::write_report(out, format, &Report::Width(WidthReport { rows, total }))?;
    Ok(true)
}

fn measure(text: &str, options: &WidthOptions) -> WidthRow {
    WidthRow {
        text: text.to_string(),
        width: width_with(text, options),
    }
}

fn measure_lines(text: &str, options: &WidthOptions) -> Vec<WidthRow> {
    text.lines().map(|line| measure(line, options)).collect()
}
