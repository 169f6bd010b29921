// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format output.

use serde_json::json;

use super::{ReportFormatter, SearchReport, TableReport};

/// JSON format formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format_search(&self, report: &SearchReport) -> anyhow::Result<String> {
        let mut output = serde_json::Map::new();

        output.insert("pattern".to_string(), json!(report.pattern));
        output.insert("found".to_string(), json!(report.found()));
        output.insert("index".to_string(), json!(report.index()));
        output.insert("matches".to_string(), json!(report.matches));

        if let Some(ref lines) = report.lines {
            let lines: Vec<_> = lines
                .iter()
                .map(|m| {
                    json!({
                        "offset": m.offset,
                        "line": m.line,
                        "column": m.column,
                    })
                })
                .collect();
            output.insert("lines".to_string(), json!(lines));
        }

        Ok(serde_json::to_string(&output)? + "\n")
    }

    fn format_table(&self, report: &TableReport) -> anyhow::Result<String> {
        let output = json!({
            "pattern": report.pattern,
            "table": report.table,
        });
        Ok(serde_json::to_string(&output)? + "\n")
    }
}
