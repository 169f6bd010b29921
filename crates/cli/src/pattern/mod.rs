// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exact substring search with Knuth-Morris-Pratt.
//!
//! Two stages, always in this order:
//! - [`build_failure_table`]: longest proper border of every pattern prefix
//! - [`find_first_match`]: linear scan that consults the table on mismatch
//!
//! Both operate on any slice of `Eq` code units. The CLI searches bytes.

pub mod matcher;
pub mod table;

pub use matcher::{
    LineLocator, LineMatch, Matcher, Matches, byte_offset_to_line, find_first_match,
    find_first_match_str,
};
pub use table::{FailureTable, build_failure_table};
