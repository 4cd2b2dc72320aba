// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;
use crate::config::Config;
use crate::glob::{ExpandOptions, GlobOptions, UnmatchedPolicy};
use crate::width::{AmbiguousWidth, WidthOptions, WidthTable};

/// Scan glob patterns, balanced delimiters and display widths
#[derive(Parser)]
#[command(name = "scanpat")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SCANPAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, global = true, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile a glob to a regex and test inputs against it
    Glob(GlobArgs),
    /// Find the first balanced pair of delimiters
    Match(MatchArgs),
    /// Measure terminal display width
    Width(WidthArgs),
    /// Expand braces
    Expand(ExpandArgs),
    /// Report whether a pattern is magic and its literal parent
    Magic(MagicArgs),
}

#[derive(clap::Args)]
pub struct GlobArgs {
    /// Glob pattern
    pub pattern: String,

    /// Strings to test against the pattern
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Enable ?, [...] and {a,b}
    #[arg(long, overrides_with = "no_extended")]
    pub extended: bool,

    /// Only * is magic
    #[arg(long, overrides_with = "extended")]
    pub no_extended: bool,

    /// Keep * within a path segment; ** crosses segments
    #[arg(long)]
    pub globstar: bool,

    /// Match case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Match anywhere in the input
    #[arg(long)]
    pub unanchored: bool,

    /// Handling of unclosed or stray [ and {
    #[arg(long, value_name = "POLICY")]
    pub unmatched: Option<UnmatchedPolicy>,
}

impl GlobArgs {
    /// Flags layered over the configured options.
    pub fn options(&self, config: &Config) -> GlobOptions {
        let mut options = config.glob.options();
        if self.extended {
            options.extended = true;
        }
        if self.no_extended {
            options.extended = false;
        }
        options.globstar |= self.globstar;
        options.case_insensitive |= self.ignore_case;
        if self.unanchored {
            options.anchored = false;
        }
        if let Some(policy) = self.unmatched {
            options.unmatched = policy;
        }
        options
    }
}

#[derive(clap::Args)]
pub struct MatchArgs {
    /// Opening marker
    pub open: String,

    /// Closing marker
    pub close: String,

    /// Text to search
    pub input: String,

    /// Treat OPEN and CLOSE as regular expressions
    #[arg(long)]
    pub regex: bool,
}

#[derive(clap::Args)]
pub struct WidthArgs {
    /// Strings to measure
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Measure each line of a file
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Width of East Asian ambiguous characters [default: wide]
    #[arg(long)]
    pub ambiguous: Option<AmbiguousWidth>,

    /// Width table
    #[arg(long)]
    pub table: Option<WidthTable>,
}

impl WidthArgs {
    pub fn options(&self, config: &Config) -> WidthOptions {
        let mut options = config.width.options();
        if let Some(ambiguous) = self.ambiguous {
            options.ambiguous = ambiguous;
        }
        if let Some(table) = self.table {
            options.table = table;
        }
        options
    }
}

#[derive(clap::Args)]
pub struct ExpandArgs {
    /// Pattern with brace groups
    pub pattern: String,

    /// Maximum number of expansions
    #[arg(long, value_name = "N")]
    pub max: Option<usize>,
}

impl ExpandArgs {
    pub fn options(&self, config: &Config) -> ExpandOptions {
        let mut options = config.expand.options();
        if let Some(max) = self.max {
            options.max = max;
        }
        options
    }
}

#[derive(clap::Args)]
pub struct MagicArgs {
    /// Glob pattern
    pub pattern: String,

    /// Only * is magic
    #[arg(long)]
    pub no_extended: bool,
}

impl MagicArgs {
    pub fn extended(&self, config: &Config) -> bool {
        config.glob.extended && !self.no_extended
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
