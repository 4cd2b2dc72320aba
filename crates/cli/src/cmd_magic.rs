// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Magic command implementation.

use termcolor::WriteColor;

use scanpat::cli::{MagicArgs, OutputFormat};
use scanpat::config::Config;
use scanpat::glob::{glob_parent, has_magic, is_glob};
use scanpat::report::{self, MagicReport, Report};

pub fn run(args: &MagicArgs, config: &Config, out: &mut dyn WriteColor, format: OutputFormat) -> anyhow::Result<bool> {
    let report = Report::Magic(MagicReport {
        pattern: args.pattern.clone(),
        has_magic: has_magic(&args.pattern, args.extended(config)),
        is_glob: is_glob(&args.pattern),
        glob_parent: glob_parent(&args.pattern),
    });
    report::write_report(out, format, &report)?;
    Ok(true)
}
