// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Linear-time exact substring search built on Knuth-Morris-Pratt failure tables.
//!
//! The search core lives in [`pattern`]. The remaining modules back the
//! `borders` command-line tool.

pub mod cli;
pub mod config;
pub mod error;
pub mod file_reader;
pub mod logging;
pub mod pattern;
pub mod report;

pub use pattern::{FailureTable, Matcher, build_failure_table, find_first_match};

#[cfg(test)]
pub mod test_utils;
