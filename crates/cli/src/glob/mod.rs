// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Glob patterns.
//!
//! Compiles shell-style globs to anchored regular expressions, expands
//! braces and answers questions about a pattern (is it magic, where does
//! its literal prefix end).

mod assemble;
mod escape;
mod expand;
mod magic;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::error::Result;
use crate::scan::GlobClassifier;

pub use assemble::GlobAssembler;
pub use escape::{escape_glob, escape_regex, unescape_glob};
pub use expand::{ExpandOptions, expand};
pub use magic::{glob_parent, has_magic, is_glob};

/// What to do with a `[` or `{` that is never closed, or a stray closer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedPolicy {
    /// Treat the delimiter as a literal character.
    #[default]
    Ignore,
    /// Fail with [`Error::Unbalanced`](crate::Error::Unbalanced).
    Error,
}

/// Options for [`glob_to_regex`] and [`compile_glob`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobOptions {
    /// Enable `?`, `[...]` classes and `{a,b}` groups.
    pub extended: bool,
    /// `*` stays within a path segment and a whole-segment `**` crosses them.
    pub globstar: bool,
    pub case_insensitive: bool,
    /// Wrap the regex in `^...$`.
    pub anchored: bool,
    pub unmatched: UnmatchedPolicy,
}

impl Default for GlobOptions {
    fn default() -> Self {
        Self {
            extended: defaults::glob::EXTENDED,
            globstar: defaults::glob::GLOBSTAR,
            case_insensitive: defaults::glob::CASE_INSENSITIVE,
            anchored: defaults::glob::ANCHORED,
            unmatched: UnmatchedPolicy::Ignore,
        }
    }
}

/// A glob compiled to a regular expression.
#[derive(Debug, Clone)]
pub struct CompiledGlob {
    pattern: String,
    regex: Regex,
}

impl CompiledGlob {
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The glob this was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Regex source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Translate `pattern` to regex source.
///
/// Fails only when `options.unmatched` is [`UnmatchedPolicy::Error`] and a
/// delimiter is unbalanced.
pub fn glob_to_regex(pattern: &str, options: &GlobOptions) -> Result<String> {
    let classifier = GlobClassifier::new(options.extended);
    let body = crate::scan::assemble(pattern, classifier, GlobAssembler::new(pattern, *options))?;
    if options.anchored {
        Ok(format!("^{body}$"))
    } else {
        Ok(body)
    }
}

/// Compile `pattern` into a matcher.
pub fn compile_glob(pattern: &str, options: &GlobOptions) -> Result<CompiledGlob> {
    let source = glob_to_regex(pattern, options)?;
    let regex = RegexBuilder::new(&source)
        .case_insensitive(options.case_insensitive)
        .build()?;
    tracing::debug!(pattern, regex = %source, "compiled glob");
    Ok(CompiledGlob {
        pattern: pattern.to_string(),
        regex,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
