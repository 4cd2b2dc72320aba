// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Escape and nesting state for a single scan.

use super::classify::Category;

/// Kind of nesting delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delim {
    Bracket,
    Brace,
}

impl Delim {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bracket => "bracket",
            Self::Brace => "brace",
        }
    }
}

/// Effect of observing one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerDelta {
    /// No special meaning.
    Plain,
    /// Preceded by an escape introducer; take the code point literally.
    Escaped,
    /// An escape introducer; the next code point is literal.
    Introducer,
    /// A delimiter opened; `depth` is the depth after opening.
    Opened { delim: Delim, depth: usize },
    /// A delimiter closed; `depth` is the depth after closing.
    Closed { delim: Delim, depth: usize },
    /// A closer with nothing open. Absorbed as a literal.
    Unmatched,
    /// A brace or nested bracket inside a bracket class. Literal.
    Nested,
}

/// Mutable scan state.
///
/// Depth counters are unsigned and clamped: excess closers never underflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Code points consumed so far.
    pub position: usize,
    /// Byte offset of the next code point.
    pub offset: usize,
    pub in_escape: bool,
    pub bracket_depth: usize,
    pub brace_depth: usize,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Tracks escapes and bracket/brace nesting.
#[derive(Debug, Clone, Default)]
pub struct EscapeTracker {
    state: ScanState,
}

impl EscapeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Record that one code point of `len` bytes was consumed.
    pub(crate) fn advance(&mut self, len: usize) {
        self.state.position += 1;
        self.state.offset += len;
    }

    /// Feed one category and report how it should be treated.
    pub fn observe(&mut self, category: Category) -> TrackerDelta {
        if self.state.in_escape {
            self.state.in_escape = false;
            return TrackerDelta::Escaped;
        }

        let in_class = self.state.bracket_depth > 0;
        match category {
            Category::EscapeIntroducer => {
                self.state.in_escape = true;
                TrackerDelta::Introducer
            }
            Category::OpenBracket if in_class => TrackerDelta::Nested,
            Category::OpenBracket => {
                self.state.bracket_depth += 1;
                TrackerDelta::Opened {
                    delim: Delim::Bracket,
                    depth: self.state.bracket_depth,
                }
            }
            Category::CloseBracket => {
                if in_class {
                    self.state.bracket_depth -= 1;
                    TrackerDelta::Closed {
                        delim: Delim::Bracket,
                        depth: self.state.bracket_depth,
                    }
                } else {
                    TrackerDelta::Unmatched
                }
            }
            Category::OpenBrace | Category::CloseBrace if in_class => TrackerDelta::Nested,
            Category::OpenBrace => {
                self.state.brace_depth += 1;
                TrackerDelta::Opened {
                    delim: Delim::Brace,
                    depth: self.state.brace_depth,
                }
            }
            Category::CloseBrace => {
                if self.state.brace_depth == 0 {
                    TrackerDelta::Unmatched
                } else {
                    self.state.brace_depth -= 1;
                    TrackerDelta::Closed {
                        delim: Delim::Brace,
                        depth: self.state.brace_depth,
                    }
                }
            }
            Category::Magic | Category::Separator if in_class => TrackerDelta::Nested,
            Category::Ordinary | Category::Magic | Category::Separator | Category::CombiningMark => {
                TrackerDelta::Plain
            }
        }
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
