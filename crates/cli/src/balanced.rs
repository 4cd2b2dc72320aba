// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Balanced delimiter matching.
//!
//! Finds the first pair of open/close markers that brings nesting back to
//! zero and splits the input around it. If the outermost opener is never
//! closed, the leftmost complete inner pair is returned instead. No pair at
//! all is `None`, never an error.
//!
//! Single-character markers go through the code point
//! [`Scanner`](crate::scan::Scanner); longer
//! markers are located with `memchr::memmem` and fed to the same assembler.

use memchr::memmem;
use regex::Regex;
use serde::Serialize;

use crate::scan::{Assembler, Boundary, Delim, DelimiterClassifier, Emission, Step, assemble};

/// A balanced pair and the text around it.
///
/// `start` and `end` are byte offsets of the open and close markers, so
/// `pre + open + body + close + post` reconstructs the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalancedMatch<'a> {
    pub start: usize,
    pub end: usize,
    pub pre: &'a str,
    pub body: &'a str,
    pub post: &'a str,
}

impl<'a> BalancedMatch<'a> {
    fn from_range(input: &'a str, (start, end): (usize, usize), open_len: usize, close_len: usize) -> Self {
        Self {
            start,
            end,
            pre: &input[..start],
            body: &input[start + open_len..end],
            post: &input[end + close_len..],
        }
    }
}

/// Find the first balanced `open`/`close` pair in `input`.
pub fn balanced<'a>(open: &str, close: &str, input: &'a str) -> Option<BalancedMatch<'a>> {
    let range = balanced_range(open, close, input)?;
    Some(BalancedMatch::from_range(input, range, open.len(), close.len()))
}

/// Byte offsets of the first balanced `open`/`close` pair in `input`.
pub fn balanced_range(open: &str, close: &str, input: &str) -> Option<(usize, usize)> {
    if open.is_empty() || close.is_empty() {
        return None;
    }
    let assembler = BalancedAssembler::new(open == close);
    match (single_char(open), single_char(close)) {
        (Some(o), Some(c)) => assemble(input, DelimiterClassifier::new(o, c), assembler),
        _ => {
            let mut assembler = assembler;
            for step in marker_steps(open, close, input) {
                assembler.push(step);
            }
            assembler.finish()
        }
    }
}

/// Like [`balanced`], with markers given as patterns.
///
/// Each pattern's first match in `input` becomes the literal marker.
pub fn balanced_regex<'a>(open: &Regex, close: &Regex, input: &'a str) -> Option<BalancedMatch<'a>> {
    let open = open.find(input)?.as_str();
    let close = close.find(input)?.as_str();
    balanced(open, close, input)
}

/// Like [`balanced`], using the classifier's markers, escape and separator.
///
/// Escaped markers never open or close a pair.
pub fn balanced_in<'a>(input: &'a str, classifier: DelimiterClassifier) -> Option<BalancedMatch<'a>> {
    let same = classifier.open() == classifier.close();
    let (open_len, close_len) = (classifier.open().len_utf8(), classifier.close().len_utf8());
    let range = assemble(input, classifier, BalancedAssembler::new(same))?;
    Some(BalancedMatch::from_range(input, range, open_len, close_len))
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Open/close steps for multi-character markers, in input order.
///
/// Closers with nothing open, or overlapping the latest opener, are dropped.
/// When a closer and an opener start at the same offset the closer wins.
fn marker_steps(open: &str, close: &str, input: &str) -> Vec<Step> {
    let opens: Vec<usize> = memmem::find_iter(input.as_bytes(), open.as_bytes()).collect();
    let closes: Vec<usize> = if open == close {
        Vec::new()
    } else {
        memmem::find_iter(input.as_bytes(), close.as_bytes()).collect()
    };

    let mut steps = Vec::with_capacity(opens.len() + closes.len() + 1);
    let (mut oi, mut ci, mut depth) = (0, 0, 0usize);
    let mut open_end = 0;
    loop {
        let next_open = opens.get(oi).copied();
        let next_close = closes.get(ci).copied();
        let (offset, is_open) = match (next_open, next_close) {
            (Some(o), Some(c)) if o < c => (o, true),
            (_, Some(c)) => (c, false),
            (Some(o), None) => (o, true),
            (None, None) => break,
        };
        if is_open {
            oi += 1;
            depth += 1;
            open_end = offset + open.len();
            steps.push(Step {
                offset,
                emission: Emission::Boundary(Boundary::Open {
                    delim: Delim::Brace,
                    depth,
                }),
            });
        } else {
            ci += 1;
            if depth == 0 || offset < open_end {
                continue;
            }
            depth -= 1;
            steps.push(Step {
                offset,
                emission: Emission::Boundary(Boundary::Close {
                    delim: Delim::Brace,
                    depth,
                }),
            });
        }
    }
    steps.push(Step {
        offset: input.len(),
        emission: Emission::Boundary(Boundary::End),
    });
    steps
}

/// Pairs brace boundaries into a `(start, end)` range.
#[derive(Debug, Default)]
pub struct BalancedAssembler {
    same_markers: bool,
    open: Vec<usize>,
    leftmost_inner: Option<(usize, usize)>,
    result: Option<(usize, usize)>,
}

impl BalancedAssembler {
    /// `same_markers` pairs each opener with the next occurrence of itself.
    pub fn new(same_markers: bool) -> Self {
        Self {
            same_markers,
            ..Self::default()
        }
    }
}

impl Assembler for BalancedAssembler {
    type Output = Option<(usize, usize)>;

    fn push(&mut self, step: Step) {
        if self.result.is_some() {
            return;
        }
        match step.emission {
            Emission::Boundary(Boundary::Open {
                delim: Delim::Brace,
                ..
            }) => {
                if self.same_markers
                    && let Some(&start) = self.open.first()
                {
                    self.result = Some((start, step.offset));
                } else {
                    self.open.push(step.offset);
                }
            }
            Emission::Boundary(Boundary::Close {
                delim: Delim::Brace,
                ..
            }) => {
                let Some(start) = self.open.pop() else {
                    return;
                };
                if self.open.is_empty() {
                    self.result = Some((start, step.offset));
                } else if self.leftmost_inner.is_none_or(|(left, _)| start < left) {
                    self.leftmost_inner = Some((start, step.offset));
                }
            }
            _ => {}
        }
    }

    fn finish(self) -> Option<(usize, usize)> {
        self.result.or(self.leftmost_inner)
    }
}

#[cfg(test)]
#[path = "balanced_tests.rs"]
mod tests;
