// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `scanpat.toml` loading.
//!
//! Lookup order: an explicit path (`-C/--config` or `SCANPAT_CONFIG`),
//! then `scanpat.toml` in the working directory, then built-in defaults.

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::glob::{ExpandOptions, GlobOptions, UnmatchedPolicy};
use crate::width::{AmbiguousWidth, WidthOptions, WidthTable};

/// Parsed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Schema version; must be [`defaults::CONFIG_VERSION`].
    pub version: i64,

    #[serde(default)]
    pub glob: GlobConfig,

    #[serde(default)]
    pub width: WidthConfig,

    #[serde(default)]
    pub expand: ExpandConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: defaults::CONFIG_VERSION,
            glob: GlobConfig::default(),
            width: WidthConfig::default(),
            expand: ExpandConfig::default(),
        }
    }
}

/// `[glob]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobConfig {
    #[serde(default = "GlobConfig::default_extended")]
    pub extended: bool,

    #[serde(default = "GlobConfig::default_globstar")]
    pub globstar: bool,

    #[serde(default = "GlobConfig::default_case_insensitive")]
    pub case_insensitive: bool,

    #[serde(default = "GlobConfig::default_anchored")]
    pub anchored: bool,

    /// Unclosed or stray delimiters: "ignore" | "error"
    #[serde(default)]
    pub unmatched: UnmatchedPolicy,
}

impl Default for GlobConfig {
    fn default() -> Self {
        Self {
            extended: Self::default_extended(),
            globstar: Self::default_globstar(),
            case_insensitive: Self::default_case_insensitive(),
            anchored: Self::default_anchored(),
            unmatched: UnmatchedPolicy::default(),
        }
    }
}

impl GlobConfig {
    pub(super) fn default_extended() -> bool {
        defaults::glob::EXTENDED
    }

    pub(super) fn default_globstar() -> bool {
        defaults::glob::GLOBSTAR
    }

    pub(super) fn default_case_insensitive() -> bool {
        defaults::glob::CASE_INSENSITIVE
    }

    pub(super) fn default_anchored() -> bool {
        defaults::glob::ANCHORED
    }

    pub fn options(&self) -> GlobOptions {
        GlobOptions {
            extended: self.extended,
            globstar: self.globstar,
            case_insensitive: self.case_insensitive,
            anchored: self.anchored,
            unmatched: self.unmatched,
        }
    }
}

/// `[width]` section.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidthConfig {
    /// "narrow" | "wide"
    pub ambiguous: AmbiguousWidth,

    /// "east-asian" | "unicode"
    pub table: WidthTable,
}

impl WidthConfig {
    pub fn options(&self) -> WidthOptions {
        WidthOptions {
            ambiguous: self.ambiguous,
            table: self.table,
        }
    }
}

/// `[expand]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpandConfig {
    #[serde(default = "ExpandConfig::default_max")]
    pub max: usize,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            max: Self::default_max(),
        }
    }
}

impl ExpandConfig {
    pub(super) fn default_max() -> usize {
        defaults::expand::MAX
    }

    pub fn options(&self) -> ExpandOptions {
        ExpandOptions { max: self.max }
    }
}

/// Parse config text. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })?;
    if config.version != defaults::CONFIG_VERSION {
        return Err(Error::UnsupportedVersion {
            path: path.to_path_buf(),
            found: config.version,
            expected: defaults::CONFIG_VERSION,
        });
    }
    Ok(config)
}

/// Read and parse a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

/// The config file to use, if any.
///
/// An explicit path is returned even if it does not exist, so that loading
/// it reports the error.
pub fn find(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let candidate = cwd.join(defaults::CONFIG_FILE);
    candidate.is_file().then_some(candidate)
}

/// Find and load the config, falling back to defaults.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    match find(explicit, cwd) {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            load(&path)
        }
        None => {
            tracing::debug!("no {} found, using defaults", defaults::CONFIG_FILE);
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
