// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `borders demo` command implementation.

use borders::error::ExitCode;
use borders::pattern::find_first_match_str;

/// (pattern, text) pairs searched by the demo.
const DEMO_CASES: [(&str, &str); 2] = [("0101", "0011001011"), ("ABC", "ABABABACCABC")];

/// Run the `borders demo` command. Prints one result per line.
pub fn run() -> anyhow::Result<ExitCode> {
    for (pattern, text) in DEMO_CASES {
        match find_first_match_str(pattern, text) {
            Some(index) => println!("{}", index),
            None => println!("not found"),
        }
    }
    Ok(ExitCode::Success)
}
