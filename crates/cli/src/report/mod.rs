// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for search results and failure tables.

mod json;
mod text;

use crate::cli::OutputFormat;
use crate::pattern::{LineLocator, LineMatch};

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Outcome of one `find` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Pattern as searched, lossily decoded for display.
    pub pattern: String,
    /// Match offsets in increasing order. Holds at most one entry unless
    /// every occurrence was requested.
    pub matches: Vec<usize>,
    /// Line positions parallel to `matches`, present when the haystack came
    /// from a file.
    pub lines: Option<Vec<LineMatch>>,
}

impl SearchReport {
    pub fn new(pattern: &[u8], matches: Vec<usize>) -> Self {
        Self {
            pattern: String::from_utf8_lossy(pattern).into_owned(),
            matches,
            lines: None,
        }
    }

    /// Attach line and column positions computed against `haystack`.
    ///
    /// `matches` is increasing, so one locator pass covers all of them.
    pub fn with_lines(mut self, haystack: &[u8]) -> Self {
        let mut locator = LineLocator::new(haystack);
        let lines = self
            .matches
            .iter()
            .map(|&offset| locator.locate(offset))
            .collect();
        self.lines = Some(lines);
        self
    }

    pub fn found(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Offset of the first match.
    pub fn index(&self) -> Option<usize> {
        self.matches.first().copied()
    }
}

/// A pattern and its failure table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    pub pattern: String,
    pub table: Vec<usize>,
}

impl TableReport {
    pub fn new(pattern: &[u8], table: Vec<usize>) -> Self {
        Self {
            pattern: String::from_utf8_lossy(pattern).into_owned(),
            table,
        }
    }
}

/// Trait for formatting command output.
pub trait ReportFormatter {
    /// Format the outcome of a search.
    fn format_search(&self, report: &SearchReport) -> anyhow::Result<String>;

    /// Format a failure table.
    fn format_table(&self, report: &TableReport) -> anyhow::Result<String>;
}

/// Formatter for the requested output format.
pub fn formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
