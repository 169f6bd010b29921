// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `borders find`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// Inline text
// =============================================================================

/// Reports the first occurrence and exits 0
#[test]
fn find_reports_first_index() {
    borders_cmd()
        .args(["find", "ABC", "ABABABACCABC"])
        .assert()
        .success()
        .stdout("found at 9\n");
}

/// Exits 1 with "not found" when the pattern does not occur
#[test]
fn find_not_found_exits_one() {
    borders_cmd()
        .args(["find", "xyz", "ABABABACCABC"])
        .assert()
        .code(1)
        .stdout("not found\n");
}

/// Empty pattern matches at index 0, even against empty text
#[test]
fn find_empty_pattern_matches_at_zero() {
    borders_cmd()
        .args(["find", "", "anything"])
        .assert()
        .success()
        .stdout("found at 0\n");
    borders_cmd()
        .args(["find", "", ""])
        .assert()
        .success()
        .stdout("found at 0\n");
}

/// A pattern can never match empty text
#[test]
fn find_in_empty_text_is_not_found() {
    borders_cmd().args(["find", "x", ""]).assert().code(1);
}

/// --all lists every occurrence, overlapping ones included
#[test]
fn find_all_lists_overlapping_matches() {
    borders_cmd()
        .args(["find", "--all", "aba", "ababa"])
        .assert()
        .success()
        .stdout("found at 0\nfound at 2\n");
}

// =============================================================================
// Input sources
// =============================================================================

/// --file searches file contents and adds line:column
#[test]
fn find_in_file_reports_line_and_column() {
    borders_cmd()
        .args(["find", "lazy", "--file"])
        .arg(fixture("haystack").join("pangram.txt"))
        .assert()
        .success()
        .stdout("found at 35 (line 2:16)\n");
}

/// --file with --all reports each line
#[test]
fn find_all_in_file() {
    borders_cmd()
        .args(["find", "fox", "--all", "-f"])
        .arg(fixture("haystack").join("pangram.txt"))
        .assert()
        .success()
        .stdout("found at 16 (line 1:17)\nfound at 65 (line 3:21)\n");
}

/// Binary file contents are searched byte for byte
#[test]
fn find_in_binary_file() {
    let project = Project::empty();
    let path = project.file("blob.bin", [0x00u8, 0xff, 0x10, 0xff, 0x10, 0x00]);
    borders_cmd()
        .arg("find")
        .arg("\u{10}")
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicates::str::starts_with("found at 2"));
}

/// Missing file exits 3 and names the path on stderr
#[test]
fn find_missing_file_is_internal_error() {
    borders_cmd()
        .args(["find", "x", "--file", "does-not-exist.txt"])
        .assert()
        .code(3)
        .stderr(predicates::str::contains("does-not-exist.txt"));
}

/// Reads stdin when neither TEXT nor --file is given
#[test]
fn find_reads_stdin() {
    assert_cmd::Command::from_std(borders_cmd())
        .args(["find", "needle"])
        .write_stdin("hay needle hay")
        .assert()
        .success()
        .stdout("found at 4\n");
}

/// TEXT and --file are mutually exclusive
#[test]
fn find_text_and_file_conflict() {
    borders_cmd()
        .args(["find", "a", "abc", "--file", "x.txt"])
        .assert()
        .code(2);
}

// =============================================================================
// JSON output
// =============================================================================

/// `--output json` produces a machine-readable result
#[test]
fn find_json_output() {
    let output = borders_cmd()
        .args(["find", "ABC", "ABABABACCABC", "-o", "json"])
        .output()
        .expect("command should run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["pattern"], "ABC");
    assert_eq!(value["found"], true);
    assert_eq!(value["index"], 9);
    assert_eq!(value["matches"], serde_json::json!([9]));
}

/// JSON not-found result has a null index
#[test]
fn find_json_not_found() {
    let output = borders_cmd()
        .args(["find", "zz", "abc", "--output", "json"])
        .output()
        .expect("command should run");
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["found"], false);
    assert!(value["index"].is_null());
}

// =============================================================================
// Logging
// =============================================================================

/// --verbose writes diagnostics to stderr, never stdout
#[test]
fn find_verbose_logs_to_stderr() {
    borders_cmd()
        .args(["find", "-v", "ABC", "ABABABACCABC"])
        .assert()
        .success()
        .stdout("found at 9\n")
        .stderr(predicates::str::contains("searched 12 bytes").and(predicates::str::contains("1 match")));
}
