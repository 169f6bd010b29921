// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format output.

use std::fmt::Write;

use super::{ReportFormatter, SearchReport, TableReport};

/// Text format formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format_search(&self, report: &SearchReport) -> anyhow::Result<String> {
        if !report.found() {
            return Ok("not found\n".to_string());
        }

        let mut output = String::new();
        for (i, offset) in report.matches.iter().enumerate() {
            write!(output, "found at {}", offset)?;
            if let Some(line) = report.lines.as_ref().and_then(|lines| lines.get(i)) {
                write!(output, " (line {}:{})", line.line, line.column)?;
            }
            writeln!(output)?;
        }
        Ok(output)
    }

    fn format_table(&self, report: &TableReport) -> anyhow::Result<String> {
        Ok(format!("{:?}\n", report.table))
    }
}
