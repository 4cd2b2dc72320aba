// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text input for the `width` command, with a size-based read strategy.
//!
// Allow unsafe_code for memory-mapped I/O (required by memmap2).
// Safety justification:
// 1. File handle is valid (just opened)
// 2. We don't mutate the mapped memory
// 3. Stale data on concurrent modification only affects reported widths
#![allow(unsafe_code)]
//!
//! - < 64KB: Direct read into buffer
//! - >= 64KB: Memory-mapped I/O

use std::fs::{self, File};
use std::path::Path;

use memmap2::Mmap;

use crate::error::{Error, Result};

/// Files at or above this size are memory-mapped.
pub const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Content of a file, either owned or memory-mapped.
#[derive(Debug)]
pub enum FileContent {
    /// Small file read into memory.
    Owned(Vec<u8>),
    /// Large file memory-mapped.
    Mapped(Mmap),
}

impl FileContent {
    /// Read file using appropriate strategy based on size.
    pub fn read(path: &Path) -> Result<Self> {
        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };
        let size = fs::metadata(path).map_err(io_err)?.len();

        if size < MMAP_THRESHOLD {
            Ok(FileContent::Owned(fs::read(path).map_err(io_err)?))
        } else {
            let file = File::open(path).map_err(io_err)?;
            // SAFETY: File handle is valid (just opened), we don't mutate the mapped memory,
            // and stale data on concurrent modification only affects reported widths.
            let mmap = unsafe { Mmap::map(&file).map_err(io_err)? };
            tracing::debug!("mapped {} ({size} bytes)", path.display());
            Ok(FileContent::Mapped(mmap))
        }
    }

    fn bytes(&self) -> &[u8] {
        match self {
            FileContent::Owned(bytes) => bytes,
            FileContent::Mapped(mmap) => mmap,
        }
    }

    /// Get content as string slice.
    /// Returns None if content is not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.bytes()).ok()
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, FileContent::Mapped(_))
    }
}

/// Read `path` as UTF-8 text.
pub fn read_text(path: &Path) -> Result<FileContent> {
    let content = FileContent::read(path)?;
    if content.as_str().is_none() {
        return Err(Error::NotUtf8 {
            path: path.to_path_buf(),
        });
    }
    Ok(content)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
