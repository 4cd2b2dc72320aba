// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Library error type.

use std::path::PathBuf;

use crate::scan::Delim;

/// Errors surfaced by scanpat.
///
/// Scanning itself never fails; only regex compilation, strict delimiter
/// policy, expansion limits and config/input loading do.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The assembled pattern was rejected by the regex engine.
    #[error(transparent)]
    Regex(#[from] regex::Error),

    #[error("unbalanced {} at offset {offset}", delim.as_str())]
    Unbalanced { delim: Delim, offset: usize },

    #[error("brace expansion exceeded {limit} results")]
    ExpansionLimit { limit: usize },

    #[error("failed to parse {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported config version {found} in {} (expected {expected})", path.display())]
    UnsupportedVersion {
        path: PathBuf,
        found: i64,
        expected: i64,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8", path.display())]
    NotUtf8 { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;
