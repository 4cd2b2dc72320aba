// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// `--color` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against `--no-color`, `NO_COLOR` and whether stdout is a terminal.
    pub fn choice(self, no_color_flag: bool) -> ColorChoice {
        let no_color = no_color_flag || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        match self {
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Always => resolve_color(true, no_color_flag),
            ColorMode::Auto if !std::io::stdout().is_terminal() => ColorChoice::Never,
            ColorMode::Auto => resolve_color(false, no_color),
        }
    }
}

/// `no_color` always wins over `force_color`.
pub fn resolve_color(force_color: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force_color {
        ColorChoice::Always
    } else {
        ColorChoice::Auto
    }
}

/// Color specs for text output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Patterns and section headers.
    pub fn pattern() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Compiled regex source.
    pub fn regex() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    pub fn matched() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    pub fn unmatched() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Offsets, widths and counts.
    pub fn number() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Field labels.
    pub fn label() -> ColorSpec {
        ColorSpec::new()
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
