// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Haystack loading with a size-based strategy.
//!
// Allow unsafe_code for memory-mapped I/O (required by memmap2).
// Safety justification:
// 1. File handle is valid (just opened)
// 2. We don't mutate the mapped memory
// 3. The mapping lives only for a single search
#![allow(unsafe_code)]
//!
//! - < 64KB: Direct read into buffer
//! - >= 64KB: Memory-mapped I/O

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use memmap2::Mmap;

use crate::error::{Error, Result};

/// Files at or above this size are memory-mapped.
pub const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Haystack bytes, either owned or memory-mapped.
pub enum FileContent {
    /// Small file or stdin read into memory.
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
            tracing::debug!("reading {} ({} bytes) into buffer", path.display(), size);
            Ok(FileContent::Owned(fs::read(path).map_err(io_err)?))
        } else {
            tracing::debug!("memory-mapping {} ({} bytes)", path.display(), size);
            let file = File::open(path).map_err(io_err)?;
            // SAFETY: File handle is valid (just opened) and we never mutate the
            // mapped memory.
            let mmap = unsafe { Mmap::map(&file) }.map_err(io_err)?;
            Ok(FileContent::Mapped(mmap))
        }
    }

    /// Read all of `reader` into memory.
    pub fn read_from(mut reader: impl Read) -> io::Result<Self> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(FileContent::Owned(buf))
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FileContent::Owned(bytes) => bytes,
            FileContent::Mapped(mmap) => mmap,
        }
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, FileContent::Mapped(_))
    }
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
