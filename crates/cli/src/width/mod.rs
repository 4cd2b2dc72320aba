// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal display width.
//!
//! Widths come from the East Asian Width property: fullwidth and wide code
//! points take two cells, ambiguous ones take two unless
//! [`AmbiguousWidth::Narrow`] is chosen. Combining marks and controls take
//! none, as decided by `unicode-width`. The [`WidthTable::Unicode`] table
//! delegates the remaining code points to `unicode-width` as well.

mod tables;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

use crate::scan::{Assembler, Emission, Step, WidthClassifier, assemble};

/// East Asian Width class of a code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthClass {
    Fullwidth,
    Halfwidth,
    Wide,
    Narrow,
    Ambiguous,
    Neutral,
}

impl WidthClass {
    /// Short property value alias (`F`, `H`, `W`, `Na`, `A`, `N`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fullwidth => "F",
            Self::Halfwidth => "H",
            Self::Wide => "W",
            Self::Narrow => "Na",
            Self::Ambiguous => "A",
            Self::Neutral => "N",
        }
    }
}

impl std::fmt::Display for WidthClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many cells an ambiguous-width code point takes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AmbiguousWidth {
    Narrow,
    #[default]
    Wide,
}

/// Source of per-code-point widths.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WidthTable {
    /// Built-in East Asian Width ranges.
    #[default]
    EastAsian,
    /// The `unicode-width` crate.
    Unicode,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WidthOptions {
    pub ambiguous: AmbiguousWidth,
    pub table: WidthTable,
}

/// East Asian Width class of `ch`.
pub fn east_asian_width(ch: char) -> WidthClass {
    let cp = ch as u32;
    if tables::contains(tables::FULLWIDTH, cp) {
        WidthClass::Fullwidth
    } else if tables::contains(tables::HALFWIDTH, cp) {
        WidthClass::Halfwidth
    } else if tables::contains(tables::WIDE, cp) {
        WidthClass::Wide
    } else if tables::contains(tables::NARROW, cp) {
        WidthClass::Narrow
    } else if tables::contains(tables::AMBIGUOUS, cp) {
        WidthClass::Ambiguous
    } else {
        WidthClass::Neutral
    }
}

/// Whether `ch` occupies no display cell: controls, combining marks,
/// zero-width spaces and joiners, variation selectors.
pub fn is_zero_width(ch: char) -> bool {
    matches!(ch.width(), None | Some(0))
}

/// Display width of a single code point: 0, 1 or 2.
pub fn char_width(ch: char, options: &WidthOptions) -> usize {
    if is_zero_width(ch) {
        return 0;
    }
    cell_width(ch, options)
}

/// Width of a code point already known to occupy a cell.
fn cell_width(ch: char, options: &WidthOptions) -> usize {
    match options.table {
        WidthTable::EastAsian => match east_asian_width(ch) {
            WidthClass::Fullwidth | WidthClass::Wide => 2,
            WidthClass::Ambiguous if options.ambiguous == AmbiguousWidth::Wide => 2,
            _ => 1,
        },
        WidthTable::Unicode => {
            let w = match options.ambiguous {
                AmbiguousWidth::Narrow => ch.width(),
                AmbiguousWidth::Wide => ch.width_cjk(),
            };
            w.unwrap_or(1).clamp(1, 2)
        }
    }
}

/// Display width of `text` with default options.
pub fn width(text: &str) -> usize {
    width_with(text, &WidthOptions::default())
}

/// Display width of `text`.
pub fn width_with(text: &str, options: &WidthOptions) -> usize {
    assemble(text, WidthClassifier, WidthAssembler::new(*options))
}

/// Sums per-code-point widths over a scan.
///
/// Zero-width code points arrive as [`Emission::Skip`] from the
/// [`WidthClassifier`], so every literal takes at least one cell.
#[derive(Debug, Clone)]
pub struct WidthAssembler {
    options: WidthOptions,
    total: usize,
}

impl WidthAssembler {
    pub fn new(options: WidthOptions) -> Self {
        Self { options, total: 0 }
    }
}

impl Assembler for WidthAssembler {
    type Output = usize;

    fn push(&mut self, step: Step) {
        match step.emission {
            Emission::Literal(ch) => self.total += cell_width(ch, &self.options),
            Emission::Boundary(_) | Emission::Skip => {}
        }
    }

    fn finish(self) -> usize {
        self.total
    }
}

/// Substring covering display columns `start..end`.
///
/// Negative bounds count back from the total width. A code point is kept
/// only if it starts at or after `start` and ends at or before `end`, so a
/// wide character straddling either bound is dropped.
pub fn slice_columns<'a>(text: &'a str, start: isize, end: isize, options: &WidthOptions) -> &'a str {
    let total = width_with(text, options) as isize;
    let start = if start < 0 { start + total } else { start };
    let end = if end < 0 { end + total } else { end };

    let mut columns: isize = 0;
    let mut from = None;
    let mut to = text.len();
    for (offset, ch) in text.char_indices() {
        let w = char_width(ch, options) as isize;
        if columns >= start {
            if columns + w <= end {
                from.get_or_insert(offset);
            } else {
                to = offset;
                break;
            }
        }
        columns += w;
    }

    match from {
        Some(from) => &text[from..to],
        None => "",
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
