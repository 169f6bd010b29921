// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! `BORDERS_LOG` takes an `EnvFilter` directive and wins over `--verbose`.
//! Without it, warnings are shown, or debug output with `--verbose`.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const ENV_VAR: &str = "BORDERS_LOG";

/// Default directive when `BORDERS_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "borders=debug" } else { "warn" }
}

/// Build the filter from `env_value` (the contents of `BORDERS_LOG`, if set).
///
/// An unparseable value falls back to the default directive.
pub fn build_filter(env_value: Option<&str>, verbose: bool) -> EnvFilter {
    env_value
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber. Output goes to stderr so stdout stays
/// reserved for results.
///
/// Returns `false` when a subscriber was already installed; the existing
/// one stays in place.
pub fn init(verbose: bool) -> bool {
    let env_value = std::env::var(ENV_VAR).ok();
    let filter = build_filter(env_value.as_deref(), verbose);

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();

    match installed {
        Ok(()) => true,
        Err(e) => {
            tracing::trace!("keeping existing subscriber: {}", e);
            false
        }
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
