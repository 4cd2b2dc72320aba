// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regex assembly for glob patterns.
//!
//! Turns the scanner's step stream into regex source without anchors.
//! Stars are buffered until the following code point is known so that `**`
//! can be recognized as a whole path segment.

use crate::error::{Error, Result};
use crate::scan::{Assembler, Boundary, Category, Classifier, Delim, Emission, GlobClassifier, Scanner, Step};

use super::{GlobOptions, UnmatchedPolicy};

const STAR: &str = ".*";
const SEGMENT_STAR: &str = "([^/]*)";
const GLOBSTAR: &str = "((?:[^/]*(?:/|$))*)";

/// An open `[` class or `{` group.
#[derive(Debug)]
struct Frame {
    delim: Delim,
    /// Output length before the opener was written.
    out_start: usize,
    /// Byte offset of the opener in the source.
    src_start: usize,
    /// Class members written so far.
    members: usize,
    negated: bool,
    /// Output positions of the `|` written for this group's separators.
    separators: Vec<usize>,
}

/// Glob classification with `[` and `]` as plain text.
#[derive(Debug, Clone, Copy)]
struct WithoutClasses(GlobClassifier);

impl Classifier for WithoutClasses {
    fn classify(&self, ch: char) -> Category {
        match self.0.classify(ch) {
            Category::OpenBracket | Category::CloseBracket => Category::Ordinary,
            category => category,
        }
    }
}

/// Builds regex source from glob scan steps.
pub struct GlobAssembler<'a> {
    source: &'a str,
    options: GlobOptions,
    out: String,
    frames: Vec<Frame>,
    stars: usize,
    /// Code point before the pending stars.
    before_stars: Option<char>,
    prev: Option<char>,
    escaped: bool,
    error: Option<Error>,
}

impl<'a> GlobAssembler<'a> {
    pub fn new(source: &'a str, options: GlobOptions) -> Self {
        Self::fragment(source, options, None)
    }

    /// Assembler for a tail of a larger pattern; `prev` is the code point
    /// that preceded it.
    fn fragment(source: &'a str, options: GlobOptions, prev: Option<char>) -> Self {
        Self {
            source,
            options,
            out: String::with_capacity(source.len() * 2),
            frames: Vec::new(),
            stars: 0,
            before_stars: None,
            prev,
            escaped: false,
            error: None,
        }
    }

    fn in_class(&self) -> bool {
        self.frames.last().is_some_and(|f| f.delim == Delim::Bracket)
    }

    fn in_group(&self) -> bool {
        self.frames.last().is_some_and(|f| f.delim == Delim::Brace)
    }

    /// Write pending stars. Returns true when a globstar absorbed the
    /// following `/`.
    fn flush_stars(&mut self, next: Option<char>) -> bool {
        if self.stars == 0 {
            return false;
        }
        let count = std::mem::take(&mut self.stars);
        if !self.options.globstar {
            self.out.push_str(STAR);
            return false;
        }
        let segment_start = matches!(self.before_stars, None | Some('/'));
        let segment_end = matches!(next, None | Some('/'));
        if count > 1 && segment_start && segment_end {
            self.out.push_str(GLOBSTAR);
            next == Some('/')
        } else {
            self.out.push_str(SEGMENT_STAR);
            false
        }
    }

    fn push_literal(&mut self, ch: char, escaped: bool) {
        if self.in_class() {
            self.push_class_member(ch, escaped);
        } else {
            push_escaped(&mut self.out, ch);
        }
    }

    fn push_class_member(&mut self, ch: char, escaped: bool) {
        let Some(frame) = self.frames.last_mut() else {
            return;
        };
        if frame.members == 0 && !frame.negated && !escaped && (ch == '!' || ch == '^') {
            frame.negated = true;
            self.out.push('^');
            return;
        }
        frame.members += 1;
        if matches!(ch, '\\' | '[' | ']' | '^' | '&' | '~') || (escaped && ch == '-') {
            self.out.push('\\');
        }
        self.out.push(ch);
    }

    fn open(&mut self, delim: Delim, offset: usize) {
        self.frames.push(Frame {
            delim,
            out_start: self.out.len(),
            src_start: offset,
            members: 0,
            negated: false,
            separators: Vec::new(),
        });
        self.out.push(match delim {
            Delim::Bracket => '[',
            Delim::Brace => '(',
        });
    }

    fn close(&mut self, delim: Delim) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        match delim {
            Delim::Bracket => {
                if frame.members == 0 {
                    // `[]` and `[!]` have no members; keep them as text.
                    let text = &self.source[frame.src_start..];
                    let text_len = if frame.negated { 3 } else { 2 };
                    let literal: String = text.chars().take(text_len).collect();
                    self.out.truncate(frame.out_start);
                    for ch in literal.chars() {
                        push_escaped(&mut self.out, ch);
                    }
                } else {
                    self.out.push(']');
                }
            }
            Delim::Brace => self.out.push(')'),
        }
    }

    fn record_stray(&mut self, ch: char, offset: usize) {
        if self.options.unmatched != UnmatchedPolicy::Error || self.error.is_some() {
            return;
        }
        let delim = match ch {
            ']' if self.options.extended => Delim::Bracket,
            '}' if self.options.extended => Delim::Brace,
            _ => return,
        };
        self.error = Some(Error::Unbalanced { delim, offset });
    }

    /// Turn every unclosed opener into text.
    ///
    /// A `{` left open never changed how the rest of the pattern scanned,
    /// so its opener and separators are rewritten in place. Nothing after
    /// an unclosed `[` can close a class, so the text after the first one is
    /// compiled once more with brackets as plain text.
    fn recover_unclosed(&mut self) -> Result<()> {
        let Some(first) = self.frames.first() else {
            return Ok(());
        };
        if self.options.unmatched == UnmatchedPolicy::Error {
            return Err(Error::Unbalanced {
                delim: first.delim,
                offset: first.src_start,
            });
        }
        tracing::warn!(
            "unclosed {} at offset {} in glob ({} unclosed in total); treating it as a literal",
            first.delim.as_str(),
            first.src_start,
            self.frames.len()
        );

        let mut rest = None;
        if let Some(i) = self.frames.iter().position(|f| f.delim == Delim::Bracket) {
            let (out_start, src_start) = (self.frames[i].out_start, self.frames[i].src_start);
            self.frames.truncate(i);
            self.out.truncate(out_start);
            push_escaped(&mut self.out, '[');

            let tail = &self.source[src_start + '['.len_utf8()..];
            let classifier = WithoutClasses(GlobClassifier::new(self.options.extended));
            let mut assembler = GlobAssembler::fragment(tail, self.options, Some('['));
            for step in Scanner::new(tail, classifier) {
                assembler.push(step);
            }
            assembler.literalize_groups();
            rest = Some(assembler.out);
        }

        self.literalize_groups();
        if let Some(rest) = rest {
            self.out.push_str(&rest);
        }
        Ok(())
    }

    /// Rewrite the remaining open `{` groups as text: `(` back to `\{` and
    /// their `|` back to `,`.
    fn literalize_groups(&mut self) {
        let mut edits: Vec<(usize, &str)> = Vec::new();
        for frame in self.frames.drain(..) {
            edits.push((frame.out_start, r"\{"));
            edits.extend(frame.separators.into_iter().map(|pos| (pos, ",")));
        }
        if edits.is_empty() {
            return;
        }
        edits.sort_unstable_by_key(|&(pos, _)| pos);

        let mut out = String::with_capacity(self.out.len() + edits.len());
        let mut last = 0;
        for (pos, text) in edits {
            out.push_str(&self.out[last..pos]);
            out.push_str(text);
            last = pos + 1;
        }
        out.push_str(&self.out[last..]);
        self.out = out;
    }
}

impl Assembler for GlobAssembler<'_> {
    type Output = Result<String>;

    fn push(&mut self, step: Step) {
        let escaped = std::mem::take(&mut self.escaped);
        match step.emission {
            Emission::Skip => {
                self.escaped = true;
            }
            Emission::Boundary(Boundary::Magic('*')) => {
                if self.stars == 0 {
                    self.before_stars = self.prev;
                }
                self.stars += 1;
                self.prev = Some('*');
            }
            Emission::Literal(ch) => {
                let swallow = self.flush_stars(Some(ch));
                if !escaped && !self.in_class() && matches!(ch, ']' | '}') {
                    self.record_stray(ch, step.offset);
                }
                if !swallow {
                    self.push_literal(ch, escaped);
                }
                self.prev = Some(ch);
            }
            Emission::Boundary(Boundary::Magic(ch)) => {
                self.flush_stars(Some(ch));
                self.out.push('.');
                self.prev = Some(ch);
            }
            Emission::Boundary(Boundary::Open { delim, .. }) => {
                let ch = opener_char(delim);
                self.flush_stars(Some(ch));
                self.open(delim, step.offset);
                self.prev = Some(ch);
            }
            Emission::Boundary(Boundary::Close { delim, .. }) => {
                let ch = closer_char(delim);
                self.flush_stars(Some(ch));
                self.close(delim);
                self.prev = Some(ch);
            }
            Emission::Boundary(Boundary::Separator { ch, .. }) => {
                self.flush_stars(Some(ch));
                if self.in_group() {
                    let pos = self.out.len();
                    if let Some(frame) = self.frames.last_mut() {
                        frame.separators.push(pos);
                    }
                    self.out.push('|');
                } else {
                    push_escaped(&mut self.out, ch);
                }
                self.prev = Some(ch);
            }
            Emission::Boundary(Boundary::End) => {
                if escaped {
                    // Trailing backslash: nothing left to escape, keep it as text.
                    self.flush_stars(Some('\\'));
                    self.push_literal('\\', true);
                } else {
                    self.flush_stars(None);
                }
            }
        }
    }

    fn finish(mut self) -> Result<String> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.recover_unclosed()?;
        Ok(self.out)
    }
}

fn opener_char(delim: Delim) -> char {
    match delim {
        Delim::Bracket => '[',
        Delim::Brace => '{',
    }
}

fn closer_char(delim: Delim) -> char {
    match delim {
        Delim::Bracket => ']',
        Delim::Brace => '}',
    }
}

/// Append `ch` to regex source, escaped if it is a regex metacharacter.
pub(crate) fn push_escaped(out: &mut String, ch: char) {
    if matches!(
        ch,
        '\\' | '.'
            | '+'
            | '*'
            | '?'
            | '('
            | ')'
            | '|'
            | '['
            | ']'
            | '{'
            | '}'
            | '^'
            | '$'
            | '#'
            | '&'
            | '-'
            | '~'
    ) {
        out.push('\\');
    }
    out.push(ch);
}

#[cfg(test)]
#[path = "assemble_tests.rs"]
mod tests;
