// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Glob command implementation.

use anyhow::Context;
use termcolor::WriteColor;

use scanpat::cli::{GlobArgs, OutputFormat};
use scanpat::config::Config;
use scanpat::glob::compile_glob;
use scanpat::report::{self, GlobReport, InputMatch, Report};

/// Compile the pattern and test every input. False if any input fails.
pub fn run(args: &GlobArgs, config: &Config, out: &mut dyn WriteColor, format: OutputFormat) -> anyhow::Result<bool> {
    let options = args.options(config);
    let glob = compile_glob(&args.pattern, &options).with_context(|| format!("invalid glob {:?}", args.pattern))?;

    let inputs: Vec<InputMatch> = args
        .inputs
        .iter()
        .map(|input| InputMatch {
            input: input.clone(),
            matched: glob.is_match(input),
        })
        .collect();
    let all_matched = inputs.iter().all(|i| i.matched);

    let report = Report::Glob(GlobReport {
        pattern: args.pattern.clone(),
        regex: glob.as_str().to_string(),
        inputs,
    });
    report::write_report(out, format, &report)?;
    Ok(all_matched)
}
