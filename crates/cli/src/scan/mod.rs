// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass scanner over Unicode code points.
//!
//! The scanner walks its input left to right, classifies every code point,
//! feeds the category to an [`EscapeTracker`] and yields one [`Step`] per
//! code point followed by a final [`Boundary::End`]. Assemblers turn the
//! step stream into a result (see [`assemble`]).

pub mod assemble;
pub mod classify;
pub mod tracker;

pub use assemble::{Assembler, assemble};
pub use classify::{Category, Classifier, DelimiterClassifier, GlobClassifier, WidthClassifier};
pub use tracker::{Delim, EscapeTracker, ScanState, TrackerDelta};

use std::str::CharIndices;

/// Structural boundary reported by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Unescaped magic character outside a bracket class.
    Magic(char),
    /// Delimiter opened; `depth` counts this delimiter.
    Open { delim: Delim, depth: usize },
    /// Delimiter closed; `depth` is what remains open.
    Close { delim: Delim, depth: usize },
    /// Unescaped separator at the current brace depth.
    Separator { ch: char, depth: usize },
    /// End of input. Always the last step.
    End,
}

/// What a single scan step produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    Literal(char),
    Boundary(Boundary),
    /// Consumed without output (escape introducers, combining marks).
    Skip,
}

/// An emission with the byte offset of the code point that produced it.
///
/// For [`Boundary::End`] the offset is the input length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub offset: usize,
    pub emission: Emission,
}

/// Lazy scanner over one input.
///
/// Single-pass and not restartable: build a new scanner to scan again.
pub struct Scanner<'a, C> {
    chars: CharIndices<'a>,
    classifier: C,
    tracker: EscapeTracker,
    len: usize,
    done: bool,
}

impl<'a, C: Classifier> Scanner<'a, C> {
    pub fn new(input: &'a str, classifier: C) -> Self {
        Self {
            chars: input.char_indices(),
            classifier,
            tracker: EscapeTracker::new(),
            len: input.len(),
            done: false,
        }
    }

    /// Current scan state.
    pub fn state(&self) -> &ScanState {
        self.tracker.state()
    }

    fn emit(&mut self, ch: char) -> Emission {
        let category = self.classifier.classify(ch);
        match self.tracker.observe(category) {
            TrackerDelta::Introducer => Emission::Skip,
            TrackerDelta::Escaped | TrackerDelta::Unmatched | TrackerDelta::Nested => {
                Emission::Literal(ch)
            }
            TrackerDelta::Opened { delim, depth } => {
                Emission::Boundary(Boundary::Open { delim, depth })
            }
            TrackerDelta::Closed { delim, depth } => {
                Emission::Boundary(Boundary::Close { delim, depth })
            }
            TrackerDelta::Plain => match category {
                Category::Magic => Emission::Boundary(Boundary::Magic(ch)),
                Category::CombiningMark => Emission::Skip,
                Category::Separator => Emission::Boundary(Boundary::Separator {
                    ch,
                    depth: self.tracker.state().brace_depth,
                }),
                _ => Emission::Literal(ch),
            },
        }
    }
}

impl<C: Classifier> Iterator for Scanner<'_, C> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.done {
            return None;
        }
        match self.chars.next() {
            Some((offset, ch)) => {
                let emission = self.emit(ch);
                self.tracker.advance(ch.len_utf8());
                Some(Step { offset, emission })
            }
            None => {
                self.done = true;
                Some(Step {
                    offset: self.len,
                    emission: Emission::Boundary(Boundary::End),
                })
            }
        }
    }
}

impl<C: Classifier> std::iter::FusedIterator for Scanner<'_, C> {}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
