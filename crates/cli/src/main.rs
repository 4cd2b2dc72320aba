// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use termcolor::StandardStream;
use tracing_subscriber::EnvFilter;

use scanpat::cli::{Cli, Command};
use scanpat::config;

mod cmd_expand;
mod cmd_glob;
mod cmd_magic;
mod cmd_match;
mod cmd_width;

/// A glob input failed to match, or no balanced pair was found.
const EXIT_NO_MATCH: u8 = 1;
/// Invalid pattern, config or input.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_NO_MATCH),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Logs go to stderr. `SCANPAT_LOG` takes an `EnvFilter` directive and
/// overrides `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SCANPAT_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Run the selected command. `Ok(false)` means "ran fine, nothing matched".
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let config = config::resolve(cli.config.as_deref(), &cwd)?;

    let mut out = StandardStream::stdout(cli.color.choice(cli.no_color));
    let ok = match &cli.command {
        Command::Glob(args) => cmd_glob::run(args, &config, &mut out, cli.output)?,
        Command::Match(args) => cmd_match::run(args, &mut out, cli.output)?,
        Command::Width(args) => cmd_width::run(args, &config, &mut out, cli.output)?,
        Command::Expand(args) => cmd_expand::run(args, &config, &mut out, cli.output)?,
        Command::Magic(args) => cmd_magic::run(args, &config, &mut out, cli.output)?,
    };
    out.flush()?;
    Ok(ok)
}
