// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! Library option types and config structs both delegate to these
//! constants, so `scanpat.toml` without a section behaves like the
//! library defaults.

/// Config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "scanpat.toml";

/// The only config schema version understood.
pub const CONFIG_VERSION: i64 = 1;

/// Glob compilation defaults.
pub mod glob {
    /// `?`, `[...]` and `{a,b}` are magic.
    pub const EXTENDED: bool = true;

    /// `*` crosses path separators.
    pub const GLOBSTAR: bool = false;

    pub const CASE_INSENSITIVE: bool = false;

    /// Whole-input matching.
    pub const ANCHORED: bool = true;
}

/// Brace expansion defaults.
pub mod expand {
    /// Maximum number of expansions (100k).
    pub const MAX: usize = 100_000;
}
