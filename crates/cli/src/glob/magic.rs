// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Questions about a pattern that don't need a compiled regex.

use crate::scan::{Boundary, Delim, Emission, GlobClassifier, Scanner};

use super::expand::{ExpandOptions, expand};

/// Whether `pattern` would match anything other than its own text.
///
/// True when brace expansion yields more than one pattern, or any pattern
/// contains an unescaped `*`, `?` (extended only) or a closed `[...]` class.
pub fn has_magic(pattern: &str, extended: bool) -> bool {
    if !extended {
        return scan_magic(pattern, false);
    }
    match expand(pattern, &ExpandOptions::default()) {
        Ok(patterns) if patterns.len() > 1 => true,
        Ok(patterns) => patterns.iter().any(|p| scan_magic(p, true)),
        Err(_) => true,
    }
}

fn scan_magic(pattern: &str, extended: bool) -> bool {
    Scanner::new(pattern, GlobClassifier::new(extended)).any(|step| {
        matches!(
            step.emission,
            Emission::Boundary(Boundary::Magic(_))
                | Emission::Boundary(Boundary::Close {
                    delim: Delim::Bracket,
                    ..
                })
        )
    })
}

/// Whether `s` looks like a glob rather than a literal path.
///
/// Recognizes unescaped `*` and `?`, a closed `[...]` class, a `{...}` group
/// holding a comma or `..`, and extglobs such as `@(a|b)`, `!(a)`, `+(a)`.
pub fn is_glob(s: &str) -> bool {
    let mut braces: Vec<(usize, bool)> = Vec::new();
    let mut escaped = false;
    for step in Scanner::new(s, GlobClassifier::new(true)) {
        let was_escaped = std::mem::take(&mut escaped);
        match step.emission {
            Emission::Skip => escaped = true,
            Emission::Boundary(Boundary::Magic(_)) => return true,
            Emission::Boundary(Boundary::Close {
                delim: Delim::Bracket,
                ..
            }) => return true,
            Emission::Boundary(Boundary::Open {
                delim: Delim::Brace,
                ..
            }) => braces.push((step.offset, false)),
            Emission::Boundary(Boundary::Separator { .. }) => {
                if let Some(top) = braces.last_mut() {
                    top.1 = true;
                }
            }
            Emission::Boundary(Boundary::Close {
                delim: Delim::Brace,
                ..
            }) => {
                if let Some((open, comma)) = braces.pop()
                    && (comma || s[open + 1..step.offset].contains(".."))
                {
                    return true;
                }
            }
            Emission::Literal('@' | '!' | '+') if !was_escaped => {
                if extglob_follows(&s[step.offset + 1..]) {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

/// `rest` starts with `(` and an unescaped `)` closes it.
fn extglob_follows(rest: &str) -> bool {
    let Some(body) = rest.strip_prefix('(') else {
        return false;
    };
    let mut escaped = false;
    for ch in body.chars() {
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            ')' => return true,
            _ => {}
        }
    }
    false
}

/// The leading directory of `pattern` that contains no glob magic.
///
/// `"src/**/*.rs"` gives `"src"`, `"*.rs"` gives `"."`. Escapes are
/// removed from the result.
pub fn glob_parent(pattern: &str) -> String {
    let mut path = pattern.to_string();
    if ends_with_enclosure_holding_slash(&path) {
        path.push('/');
    }
    // Keeps a trailing separator meaningful to dirname.
    path.push('a');
    loop {
        path = dirname(&path).to_string();
        if !is_globby(&path) {
            break;
        }
    }
    unescape_specials(&path)
}

/// `a/{b/c}` or `a/[b/]`: a trailing group that spans a separator.
fn ends_with_enclosure_holding_slash(path: &str) -> bool {
    let open = match path.chars().last() {
        Some('}') => '{',
        Some(']') => '[',
        _ => return false,
    };
    path.rfind(open).is_some_and(|start| path[start..].contains('/'))
}

fn dirname(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.is_empty() { "." } else { "/" };
    }
    match trimmed.rfind('/') {
        None => ".",
        Some(idx) => {
            let parent = trimmed[..idx].trim_end_matches('/');
            if parent.is_empty() { "/" } else { parent }
        }
    }
}

/// A glob, or an unescaped `{`, `[` or unclosed `(` anywhere.
fn is_globby(path: &str) -> bool {
    if is_glob(path) {
        return true;
    }
    let mut escaped = false;
    for (idx, ch) in path.char_indices() {
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '{' | '[' => return true,
            '(' if !path[idx + 1..].is_empty() && !path[idx + 1..].contains(')') => return true,
            _ => {}
        }
    }
    false
}

fn unescape_specials(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut chars = path.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\'
            && let Some(&next) = chars.peek()
            && matches!(next, '!' | '*' | '?' | '|' | '[' | ']' | '(' | ')' | '{' | '}')
        {
            out.push(next);
            chars.next();
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
#[path = "magic_tests.rs"]
mod tests;
