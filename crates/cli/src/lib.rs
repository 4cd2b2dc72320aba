// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass pattern scanning over Unicode text.
//!
//! One scanner walks the input code point by code point, classifying each
//! one and tracking escapes and delimiter depth. Pluggable assemblers turn
//! that stream into a compiled glob, a balanced-delimiter match or a
//! terminal display width.
//!
//! ```
//! use scanpat::{GlobOptions, balanced, compile_glob, width};
//!
//! let glob = compile_glob("*.js", &GlobOptions::default()).unwrap();
//! assert!(glob.is_match("app.js"));
//!
//! let m = balanced("{", "}", "pre{in{nest}}post").unwrap();
//! assert_eq!((m.pre, m.body, m.post), ("pre", "in{nest}", "post"));
//!
//! assert_eq!(width("A世"), 3);
//! ```

pub mod balanced;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod glob;
pub mod input;
pub mod report;
pub mod scan;
pub mod width;

#[cfg(test)]
pub mod test_utils;

pub use balanced::{BalancedMatch, balanced, balanced_in, balanced_range, balanced_regex};
pub use error::{Error, Result};
pub use glob::{
    CompiledGlob, ExpandOptions, GlobOptions, UnmatchedPolicy, compile_glob, escape_glob,
    escape_regex, expand, glob_parent, glob_to_regex, has_magic, is_glob, unescape_glob,
};
pub use width::{
    AmbiguousWidth, WidthClass, WidthOptions, WidthTable, char_width, east_asian_width, slice_columns,
    width, width_with,
};
