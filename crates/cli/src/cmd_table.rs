// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `borders table` command implementation.

use borders::cli::TableArgs;
use borders::config::Config;
use borders::error::ExitCode;
use borders::pattern::build_failure_table;
use borders::report::{TableReport, formatter};

/// Run the `borders table` command.
pub fn run(args: &TableArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let output = args.output.unwrap_or(config.find.output);
    let pattern = args.pattern.as_bytes();

    let table = build_failure_table(pattern);
    let report = TableReport::new(pattern, table.into_vec());
    print!("{}", formatter(output).format_table(&report)?);

    Ok(ExitCode::Success)
}
