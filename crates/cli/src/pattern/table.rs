// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure table construction.
//!
//! `table[i]` is the length of the longest proper border of `pattern[..i]`,
//! i.e. the longest string that is both a proper prefix and a proper suffix
//! of the first `i` units. A pattern of length `m` yields `m + 1` entries.

use std::ops::Index;

/// Border lengths indexed by prefix length.
///
/// Built once per pattern and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureTable {
    borders: Vec<usize>,
}

impl FailureTable {
    /// Number of entries, always `pattern.len() + 1`.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.borders.len()
    }

    /// Length of the pattern this table was built from.
    pub fn pattern_len(&self) -> usize {
        self.borders.len() - 1
    }

    pub fn get(&self, prefix_len: usize) -> Option<usize> {
        self.borders.get(prefix_len).copied()
    }

    /// Longest proper border of the prefix of length `prefix_len`.
    ///
    /// # Panics
    ///
    /// When `prefix_len` exceeds the pattern length.
    pub fn border(&self, prefix_len: usize) -> usize {
        self.borders[prefix_len]
    }

    /// Smallest period of the prefix of length `prefix_len`.
    ///
    /// This is the distance the matcher slides the pattern after a
    /// mismatch with `prefix_len` units confirmed. The empty prefix has
    /// period 0.
    pub fn period(&self, prefix_len: usize) -> usize {
        prefix_len - self.borders[prefix_len]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.borders
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.borders
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.borders.iter()
    }
}

impl Index<usize> for FailureTable {
    type Output = usize;

    fn index(&self, prefix_len: usize) -> &usize {
        &self.borders[prefix_len]
    }
}

impl<'a> IntoIterator for &'a FailureTable {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.borders.iter()
    }
}

/// Build the failure table for `pattern`.
///
/// Entry `i + 1` extends the border of `pattern[..i]` by `pattern[i]`. When
/// the extension fails, fall back to the border of that border and try
/// again, until either the unit matches or the chain reaches the empty
/// border. Each fallback strictly shortens the candidate, and each outer
/// step grows it by at most one, so the total work is linear in the pattern.
pub fn build_failure_table<T: Eq>(pattern: &[T]) -> FailureTable {
    let mut borders = vec![0; pattern.len() + 1];

    for (i, unit) in pattern.iter().enumerate() {
        let mut prefix_len = i;
        borders[i + 1] = loop {
            if prefix_len == 0 {
                break 0;
            }
            let candidate = borders[prefix_len];
            if pattern[candidate] == *unit {
                break candidate + 1;
            }
            prefix_len = candidate;
        };
    }

    FailureTable { borders }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
