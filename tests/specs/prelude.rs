// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the borders binary.
///
/// Runs in an empty temp directory with logging env cleared so no stray
/// borders.toml or BORDERS_LOG leaks in. Callers may override the directory.
pub fn borders_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("borders"));
    cmd.env_remove("BORDERS_LOG");
    cmd.env_remove("BORDERS_CONFIG");
    cmd.current_dir(std::env::temp_dir());
    cmd
}

/// Temporary project directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Project with a borders.toml.
    pub fn with_config(config: &str) -> Self {
        let project = Self::empty();
        project.file("borders.toml", config);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root.
    pub fn file(&self, path: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full, content).unwrap();
        full
    }
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}
