// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.
//!
//! The search core is total and has no error type. Everything here belongs
//! to the command-line front end: reading input and loading config.

use std::path::PathBuf;

/// Front-end errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("{0}")]
    Argument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Match found, or output produced.
    Success = 0,
    /// `find` completed without a match.
    NotFound = 1,
    /// Bad arguments or config.
    ConfigError = 2,
    /// I/O or other unexpected failure.
    InternalError = 3,
}

impl ExitCode {
    /// Exit code for a failed command.
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<Error>() {
            Some(Error::Config { .. } | Error::Argument(_)) => ExitCode::ConfigError,
            _ => ExitCode::InternalError,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
