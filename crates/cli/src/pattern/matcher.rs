// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Linear scan driven by a [`FailureTable`].
//!
//! The scan tracks a cursor `(index, matched)` with the invariant
//! `text[index..index + matched] == pattern[..matched]`. On a mismatch
//! after a partial match, the pattern slides forward by the period of the
//! matched prefix and comparison resumes at the border, so no text unit is
//! compared again once it has matched. `index + matched` never decreases.

use crate::pattern::table::{FailureTable, build_failure_table};

/// Find the first occurrence of `pattern` in `text`.
///
/// Builds a fresh failure table for the call and drops it on return.
/// The empty pattern matches at index 0, including against empty text.
pub fn find_first_match<T: Eq>(pattern: &[T], text: &[T]) -> Option<usize> {
    Matcher::new(pattern).find(text)
}

/// [`find_first_match`] over the bytes of two strings.
///
/// The returned index is a byte offset into `text`.
pub fn find_first_match_str(pattern: &str, text: &str) -> Option<usize> {
    find_first_match(pattern.as_bytes(), text.as_bytes())
}

/// A pattern paired with its failure table.
///
/// Build once and search any number of texts.
#[derive(Debug, Clone)]
pub struct Matcher<'p, T> {
    pattern: &'p [T],
    table: FailureTable,
}

impl<'p, T: Eq> Matcher<'p, T> {
    pub fn new(pattern: &'p [T]) -> Self {
        Self {
            pattern,
            table: build_failure_table(pattern),
        }
    }

    pub fn pattern(&self) -> &'p [T] {
        self.pattern
    }

    pub fn table(&self) -> &FailureTable {
        &self.table
    }

    /// Index of the first occurrence in `text`, if any.
    pub fn find(&self, text: &[T]) -> Option<usize> {
        self.find_at(text, 0)
    }

    /// First occurrence starting at or after `start`.
    ///
    /// Returns `None` when `start` is past the end of `text`.
    pub fn find_at(&self, text: &[T], start: usize) -> Option<usize> {
        if start > text.len() {
            return None;
        }
        if self.pattern.is_empty() {
            return Some(start);
        }
        let mut cursor = Cursor::at(start);
        scan(self.pattern, &self.table, text, &mut cursor)
    }

    pub fn is_match(&self, text: &[T]) -> bool {
        self.find(text).is_some()
    }

    /// Every occurrence in `text`, overlapping ones included, in order.
    pub fn find_iter<'m, 't>(&'m self, text: &'t [T]) -> Matches<'m, 't, T> {
        Matches {
            pattern: self.pattern,
            table: &self.table,
            text,
            cursor: Cursor::at(0),
        }
    }
}

impl Matcher<'_, u8> {
    /// First occurrence in `text` with its line and column.
    pub fn find_line(&self, text: &[u8]) -> Option<LineMatch> {
        self.find(text).map(|offset| LineMatch::locate(text, offset))
    }
}

/// Iterator over all occurrences of a pattern, see [`Matcher::find_iter`].
#[derive(Debug)]
pub struct Matches<'m, 't, T> {
    pattern: &'m [T],
    table: &'m FailureTable,
    text: &'t [T],
    cursor: Cursor,
}

impl<T: Eq> Iterator for Matches<'_, '_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.pattern.is_empty() {
            // Every position, end of text included.
            if self.cursor.index > self.text.len() {
                return None;
            }
            self.cursor.index += 1;
            return Some(self.cursor.index - 1);
        }

        let found = scan(self.pattern, self.table, self.text, &mut self.cursor)?;
        // Resume from the border of the whole pattern so overlapping
        // occurrences are reported.
        self.cursor.slide(self.table);
        Some(found)
    }
}

/// Candidate start and the number of pattern units confirmed there.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    index: usize,
    matched: usize,
}

impl Cursor {
    fn at(index: usize) -> Self {
        Self { index, matched: 0 }
    }

    /// Slide the pattern by the period of the matched prefix, keeping its border.
    fn slide(&mut self, table: &FailureTable) {
        self.index += table.period(self.matched);
        self.matched = table.border(self.matched);
    }
}

/// Advance `cursor` to the next full match of a non-empty pattern.
fn scan<T: Eq>(
    pattern: &[T],
    table: &FailureTable,
    text: &[T],
    cursor: &mut Cursor,
) -> Option<usize> {
    debug_assert!(!pattern.is_empty());

    while cursor.index + cursor.matched < text.len() {
        if text[cursor.index + cursor.matched] == pattern[cursor.matched] {
            cursor.matched += 1;
            if cursor.matched == pattern.len() {
                return Some(cursor.index);
            }
        } else if cursor.matched == 0 {
            cursor.index += 1;
        } else {
            cursor.slide(table);
        }
    }

    None
}

/// A match located by line and column within its haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch {
    /// Byte offset of the first matched unit.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based byte column within the line.
    pub column: usize,
}

impl LineMatch {
    pub fn locate(text: &[u8], offset: usize) -> Self {
        LineLocator::new(text).locate(offset)
    }
}

/// Resolves offsets to line and column in one forward pass.
///
/// Carries the line count and the start of the current line from one call to
/// the next, so locating increasing offsets costs `O(n)` in total. An offset
/// behind the previous one rescans from the start.
#[derive(Debug, Clone)]
pub struct LineLocator<'t> {
    text: &'t [u8],
    /// Bytes before `pos` have been counted.
    pos: usize,
    line: usize,
    line_start: usize,
}

impl<'t> LineLocator<'t> {
    pub fn new(text: &'t [u8]) -> Self {
        Self {
            text,
            pos: 0,
            line: 1,
            line_start: 0,
        }
    }

    /// Locate `offset`, clamped to the end of the text.
    pub fn locate(&mut self, offset: usize) -> LineMatch {
        let target = offset.min(self.text.len());
        if target < self.pos {
            *self = Self::new(self.text);
        }

        let text = self.text;
        for (i, &b) in text[self.pos..target].iter().enumerate() {
            if b == b'\n' {
                self.line += 1;
                self.line_start = self.pos + i + 1;
            }
        }
        self.pos = target;

        LineMatch {
            offset,
            line: self.line,
            column: target - self.line_start + 1,
        }
    }
}

/// Convert a byte offset to a 1-based `(line, column)` pair.
///
/// Offsets past the end are clamped to the end of `text`.
pub fn byte_offset_to_line(text: &[u8], offset: usize) -> (usize, usize) {
    let found = LineLocator::new(text).locate(offset);
    (found.line, found.column)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
