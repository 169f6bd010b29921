// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Optional `borders.toml` configuration.
//!
//! Supplies defaults for command-line flags. Flags always win.
//!
//! Resolution order: `--config` / `BORDERS_CONFIG`, then the nearest
//! `borders.toml` at or above the working directory (not crossing the git
//! root), then built-in defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

/// Name of the config file searched for.
pub const CONFIG_FILE: &str = "borders.toml";

/// Only supported config schema version.
pub const CONFIG_VERSION: u32 = 1;

/// Root of `borders.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Schema version (default: 1).
    pub version: u32,

    /// Defaults for `borders find` and `borders table`.
    pub find: FindConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            find: FindConfig::default(),
        }
    }
}

/// `[find]` section.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FindConfig {
    /// Output format: "text" | "json"
    pub output: OutputFormat,

    /// Report every occurrence instead of the first.
    pub all: bool,
}

/// Where the active configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named by `--config` or `BORDERS_CONFIG`.
    Explicit(PathBuf),
    /// Nearest borders.toml at or above the start directory.
    Discovered(PathBuf),
    /// Nothing found. `boundary` is the git root where the search stopped,
    /// or `None` when it reached the filesystem root.
    Defaults { boundary: Option<PathBuf> },
}

/// Decide which config file applies, without reading it.
pub fn discover(explicit: Option<&Path>, start_dir: &Path) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return ConfigSource::Discovered(candidate);
        }
        if dir.join(".git").exists() {
            return ConfigSource::Defaults {
                boundary: Some(dir.to_path_buf()),
            };
        }
    }

    ConfigSource::Defaults { boundary: None }
}

/// Resolve and load the active config.
pub fn resolve(explicit: Option<&Path>, start_dir: &Path) -> Result<Config> {
    match discover(explicit, start_dir) {
        ConfigSource::Explicit(path) => load(&path),
        ConfigSource::Discovered(path) => {
            tracing::debug!("discovered {}", path.display());
            load(&path)
        }
        ConfigSource::Defaults { boundary } => {
            match boundary {
                Some(root) => tracing::debug!(
                    "no {} below git root {}, using defaults",
                    CONFIG_FILE,
                    root.display()
                ),
                None => tracing::debug!("no {} found, using defaults", CONFIG_FILE),
            }
            Ok(Config::default())
        }
    }
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

/// Parse config content. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    if config.version != CONFIG_VERSION {
        return Err(Error::Config {
            path: path.to_path_buf(),
            message: format!(
                "unsupported version {} (expected {})",
                config.version, CONFIG_VERSION
            ),
        });
    }

    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
