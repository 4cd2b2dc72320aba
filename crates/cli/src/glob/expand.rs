// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bash-style brace expansion.
//!
//! `a{b,c}d` becomes `abd acd`, `{1..3}` becomes `1 2 3`. Backslash escapes
//! `{`, `}`, `,`, `.` and itself; escapes are removed from the results.

use crate::balanced::{BalancedMatch, balanced_in};
use crate::config::defaults;
use crate::error::{Error, Result};
use crate::scan::{Boundary, DelimiterClassifier, Emission, Scanner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandOptions {
    /// More results than this is an [`Error::ExpansionLimit`].
    pub max: usize,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            max: defaults::expand::MAX,
        }
    }
}

/// Expand every brace group in `pattern`.
///
/// An empty pattern has no expansions. A group without a comma or a valid
/// sequence is kept as text, as is `${...}` and a leading `{}`.
pub fn expand(pattern: &str, options: &ExpandOptions) -> Result<Vec<String>> {
    if pattern.is_empty() {
        return Ok(Vec::new());
    }
    let source = match pattern.strip_prefix("{}") {
        Some(rest) => format!("\\{{\\}}{rest}"),
        None => pattern.to_string(),
    };
    let expanded = expand_from(&source, options.max.saturating_add(1), true);
    if expanded.len() > options.max {
        return Err(Error::ExpansionLimit { limit: options.max });
    }
    let out: Vec<String> = expanded.iter().map(|s| unescape_braces(s)).collect();
    tracing::debug!(pattern, count = out.len(), "expanded braces");
    Ok(out)
}

fn brace_classifier() -> DelimiterClassifier {
    DelimiterClassifier::new('{', '}').with_escape('\\')
}

fn expand_from(s: &str, max: usize, is_top: bool) -> Vec<String> {
    let Some(m) = balanced_in(s, brace_classifier()) else {
        return vec![s.to_string()];
    };
    let post = if m.post.is_empty() {
        vec![String::new()]
    } else {
        expand_from(m.post, max, false)
    };

    if m.pre.ends_with('$') {
        return post
            .iter()
            .take(max)
            .map(|p| format!("{}{{{}}}{}", m.pre, m.body, p))
            .collect();
    }

    let sequence = Sequence::parse(m.body);
    let values = match &sequence {
        Some(seq) => seq.values(max),
        None if contains_unescaped(m.body, ',') => match alternatives(&m, max) {
            Alternatives::Many(values) => values,
            Alternatives::Single(value) => {
                return post.iter().map(|p| format!("{}{}{}", m.pre, value, p)).collect();
            }
        },
        None => {
            // `{a},b}` is read as `{a\},b}`.
            if has_comma_then_close(m.post) {
                let retry = format!("{}{{{}\\}}{}", m.pre, m.body, m.post);
                return expand_from(&retry, max, true);
            }
            return vec![s.to_string()];
        }
    };

    let mut expansions = Vec::new();
    'values: for value in &values {
        for p in &post {
            if expansions.len() >= max {
                break 'values;
            }
            let expansion = format!("{}{}{}", m.pre, value, p);
            if !is_top || sequence.is_some() || !expansion.is_empty() {
                expansions.push(expansion);
            }
        }
    }
    expansions
}

enum Alternatives {
    Many(Vec<String>),
    /// `x{{a}}y` style: one alternative that stays wrapped.
    Single(String),
}

fn alternatives(m: &BalancedMatch<'_>, max: usize) -> Alternatives {
    let parts = split_commas(m.body);
    let parts: Vec<String> = match parts.as_slice() {
        [only] => {
            // `x{{a,b}}y` expands the inner group and keeps the braces.
            let inner: Vec<String> = expand_from(only, max, false)
                .into_iter()
                .map(|e| format!("{{{e}}}"))
                .collect();
            match <[String; 1]>::try_from(inner) {
                Ok([single]) => return Alternatives::Single(single),
                Err(inner) => inner,
            }
        }
        _ => parts.iter().map(|p| p.to_string()).collect(),
    };
    Alternatives::Many(parts.iter().flat_map(|p| expand_from(p, max, false)).collect())
}

/// Split on commas outside nested braces.
fn split_commas(body: &str) -> Vec<&str> {
    let classifier = brace_classifier().with_separator(',');
    let mut parts = Vec::new();
    let mut start = 0;
    for step in Scanner::new(body, classifier) {
        match step.emission {
            Emission::Boundary(Boundary::Separator { depth: 0, .. }) => {
                parts.push(&body[start..step.offset]);
                start = step.offset + 1;
            }
            Emission::Boundary(Boundary::End) => parts.push(&body[start..]),
            _ => {}
        }
    }
    parts
}

/// Unescaped code points of `s` with their byte offsets.
fn unescaped(s: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    let mut escaped = false;
    s.char_indices().filter(move |&(_, ch)| {
        if escaped {
            escaped = false;
            return false;
        }
        if ch == '\\' {
            escaped = true;
            return false;
        }
        true
    })
}

fn contains_unescaped(s: &str, target: char) -> bool {
    unescaped(s).any(|(_, ch)| ch == target)
}

/// A comma not followed by another comma, with a `}` somewhere after it.
fn has_comma_then_close(s: &str) -> bool {
    let chars: Vec<(usize, char)> = unescaped(s).collect();
    chars.iter().enumerate().any(|(i, &(offset, ch))| {
        ch == ','
            && !chars.get(i + 1).is_some_and(|&(next, c)| c == ',' && next == offset + 1)
            && chars[i + 1..].iter().any(|&(_, c)| c == '}')
    })
}

fn unescape_braces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\'
            && let Some(&next) = chars.peek()
            && matches!(next, '\\' | '{' | '}' | ',' | '.')
        {
            out.push(next);
            chars.next();
        } else {
            out.push(ch);
        }
    }
    out
}

/// `{x..y}` or `{x..y..step}` over integers or single ASCII letters.
#[derive(Debug, PartialEq, Eq)]
struct Sequence {
    start: i64,
    end: i64,
    step: i64,
    alpha: bool,
    /// Zero-pad numbers to this many characters.
    pad_to: Option<usize>,
}

impl Sequence {
    fn parse(body: &str) -> Option<Self> {
        let parts: Vec<&str> = body.split("..").collect();
        if !(2..=3).contains(&parts.len()) {
            return None;
        }
        let step = match parts.get(2) {
            Some(s) => parse_int(s)?.checked_abs()?.max(1),
            None => 1,
        };
        if let (Some(a), Some(b)) = (letter(parts[0]), letter(parts[1])) {
            return Some(Self {
                start: i64::from(u32::from(a)),
                end: i64::from(u32::from(b)),
                step,
                alpha: true,
                pad_to: None,
            });
        }
        let start = parse_int(parts[0])?;
        let end = parse_int(parts[1])?;
        let padded = parts.iter().any(|p| is_padded(p));
        Some(Self {
            start,
            end,
            step,
            alpha: false,
            pad_to: padded.then(|| parts[0].len().max(parts[1].len())),
        })
    }

    fn values(&self, max: usize) -> Vec<String> {
        let reverse = self.end < self.start;
        let step = if reverse { -self.step } else { self.step };
        let mut out = Vec::new();
        let in_range = |i: i64| if reverse { i >= self.end } else { i <= self.end };
        let mut i = self.start;
        while out.len() < max && in_range(i) {
            out.push(self.format(i));
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
        out
    }

    fn format(&self, i: i64) -> String {
        if self.alpha {
            return match u32::try_from(i).ok().and_then(char::from_u32) {
                Some('\\') | None => String::new(),
                Some(c) => c.to_string(),
            };
        }
        let digits = i.to_string();
        match self.pad_to {
            Some(width) if digits.len() < width => {
                let zeros = "0".repeat(width - digits.len());
                match digits.strip_prefix('-') {
                    Some(abs) => format!("-{zeros}{abs}"),
                    None => format!("{zeros}{digits}"),
                }
            }
            _ => digits,
        }
    }
}

fn parse_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn letter(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}

/// `01`, `-007` and the like.
fn is_padded(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s).as_bytes();
    digits.len() >= 2 && digits[0] == b'0' && digits[1].is_ascii_digit()
}

#[cfg(test)]
#[path = "expand_tests.rs"]
mod tests;
