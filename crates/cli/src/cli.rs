// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Deserialize;

/// Linear-time exact substring search (Knuth-Morris-Pratt)
#[derive(Parser)]
#[command(name = "borders")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "BORDERS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find a pattern in a text, a file, or stdin
    Find(FindArgs),
    /// Print the failure table of a pattern
    Table(TableArgs),
    /// Run the two classic example searches
    Demo,
}

#[derive(clap::Args)]
pub struct FindArgs {
    /// Pattern to search for
    pub pattern: String,

    /// Text to search (reads stdin when neither TEXT nor --file is given)
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Search the contents of a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Report every occurrence, not just the first
    #[arg(long)]
    pub all: bool,

    /// Output format
    #[arg(short, long)]
    pub output: Option<OutputFormat>,
}

#[derive(clap::Args)]
pub struct TableArgs {
    /// Pattern to build the table for
    pub pattern: String,

    /// Output format
    #[arg(short, long)]
    pub output: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
