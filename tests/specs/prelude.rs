//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing scanpat CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Minimal valid config.
pub const MINIMAL_CONFIG: &str = "version = 1\n";

/// Returns a Command configured to run the scanpat binary.
///
/// Config and log environment variables from the caller are cleared, and
/// the command runs in an empty temp directory unless moved elsewhere.
pub fn scanpat_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("scanpat"));
    cmd.env_remove("SCANPAT_CONFIG")
        .env_remove("SCANPAT_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Parse stdout as JSON.
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

/// A temp working directory, optionally with a `scanpat.toml`.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Empty directory: no config file.
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Directory with the given `scanpat.toml`.
    pub fn with_config(content: &str) -> Self {
        let project = Self::empty();
        project.config(content);
        project
    }

    pub fn config(&self, content: &str) {
        self.file("scanpat.toml", content);
    }

    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `scanpat` running inside this directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = scanpat_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}
