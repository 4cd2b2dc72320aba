// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Code point classification.
//!
//! Every scanner use case supplies its own [`Classifier`]: glob compilation
//! cares about magic characters and groups, balanced matching about a pair of
//! markers, width calculation about zero-width code points.

use crate::width::is_zero_width;

/// Category of a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// No special meaning.
    Ordinary,
    /// Wildcard such as `*` or `?`.
    Magic,
    /// Makes the next code point literal (`\`).
    EscapeIntroducer,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    /// Occupies no display cell.
    CombiningMark,
    /// Splits alternatives (`,`).
    Separator,
}

/// Maps a code point to exactly one [`Category`].
///
/// Implementations must be pure and total.
pub trait Classifier {
    fn classify(&self, ch: char) -> Category;
}

impl<C: Classifier + ?Sized> Classifier for &C {
    fn classify(&self, ch: char) -> Category {
        (**self).classify(ch)
    }
}

/// Classifier for glob patterns.
///
/// Without `extended`, only `*` is magic and `? [ ] { }` are plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobClassifier {
    pub extended: bool,
}

impl GlobClassifier {
    pub fn new(extended: bool) -> Self {
        Self { extended }
    }
}

impl Default for GlobClassifier {
    fn default() -> Self {
        Self { extended: true }
    }
}

impl Classifier for GlobClassifier {
    fn classify(&self, ch: char) -> Category {
        match ch {
            '*' => Category::Magic,
            '\\' => Category::EscapeIntroducer,
            ',' => Category::Separator,
            '?' if self.extended => Category::Magic,
            '[' if self.extended => Category::OpenBracket,
            ']' if self.extended => Category::CloseBracket,
            '{' if self.extended => Category::OpenBrace,
            '}' if self.extended => Category::CloseBrace,
            _ => Category::Ordinary,
        }
    }
}

/// Classifier for a pair of single-character delimiters.
///
/// The open and close markers are reported as brace categories so the
/// tracker nests them. When both markers are the same character every
/// occurrence is an opener; pairing is left to the assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterClassifier {
    open: char,
    close: char,
    separator: Option<char>,
    escape: Option<char>,
}

impl DelimiterClassifier {
    pub fn new(open: char, close: char) -> Self {
        Self {
            open,
            close,
            separator: None,
            escape: None,
        }
    }

    /// Treat `ch` as an alternative separator.
    pub fn with_separator(mut self, ch: char) -> Self {
        self.separator = Some(ch);
        self
    }

    /// Treat `ch` as an escape introducer.
    pub fn with_escape(mut self, ch: char) -> Self {
        self.escape = Some(ch);
        self
    }

    pub fn open(&self) -> char {
        self.open
    }

    pub fn close(&self) -> char {
        self.close
    }
}

impl Classifier for DelimiterClassifier {
    fn classify(&self, ch: char) -> Category {
        if Some(ch) == self.escape {
            Category::EscapeIntroducer
        } else if ch == self.open {
            Category::OpenBrace
        } else if ch == self.close {
            Category::CloseBrace
        } else if Some(ch) == self.separator {
            Category::Separator
        } else {
            Category::Ordinary
        }
    }
}

/// Classifier for display width: zero-width code points are combining marks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidthClassifier;

impl Classifier for WidthClassifier {
    fn classify(&self, ch: char) -> Category {
        if is_zero_width(ch) {
            Category::CombiningMark
        } else {
            Category::Ordinary
        }
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
