// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Escaping between plain text, globs and regexes.

/// Code points with special meaning somewhere in a glob.
const GLOB_SPECIAL: &[char] = &['\\', '*', '?', '[', ']', '{', '}', '(', ')', '!', ',', '|'];

/// Backslash-escape `text` so it matches itself when used as a glob.
pub fn escape_glob(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if GLOB_SPECIAL.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Drop the backslash from every escape. A trailing lone backslash stays.
pub fn unescape_glob(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            out.push(chars.next().unwrap_or('\\'));
        } else {
            out.push(ch);
        }
    }
    out
}

/// Escape regex metacharacters in `text`.
pub fn escape_regex(text: &str) -> String {
    regex::escape(text)
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
