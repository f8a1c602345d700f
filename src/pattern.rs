//! Keyword pattern
//!
//! Compiles every registered key into a single alternation and scans lines
//! for non-overlapping occurrences, left to right. Matching is lexical: keys
//! are escaped and found wherever they appear, with no word boundaries.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Which alternative wins when one key is a prefix of another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Longer keys are tried first, ties keep declaration order
    #[default]
    Longest,
    /// Keys are tried in declaration order; the first that matches wins
    Declaration,
}

/// Half-open `[start, end)` interval of character columns within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ColumnRange {
    pub start: usize,
    pub end: usize,
}

impl ColumnRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One occurrence of a key in a scanned line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpan {
    pub text: String,
    pub range: ColumnRange,
}

#[derive(Debug, Clone)]
pub struct KeywordPattern {
    regex: Regex,
}

impl KeywordPattern {
    /// Build the alternation for `keys`. Returns `None` when there is nothing
    /// to match, so callers can skip scanning entirely.
    pub fn build<'a, I>(keys: I, policy: MatchPolicy) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut keys: Vec<&str> = keys.into_iter().filter(|k| !k.is_empty()).collect();
        if keys.is_empty() {
            return Ok(None);
        }

        if policy == MatchPolicy::Longest {
            // Stable sort, so equal lengths stay in declaration order
            keys.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        }

        let source = keys
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&source)?;

        log::debug!("Compiled keyword pattern over {} keys", keys.len());
        Ok(Some(Self { regex }))
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Find every non-overlapping match in `line`, left to right
    pub fn find_all(&self, line: &str) -> Vec<MatchSpan> {
        let mut spans = Vec::new();
        let mut column = 0;
        let mut byte_pos = 0;

        for m in self.regex.find_iter(line) {
            // Regex offsets are bytes, hosts address lines by character
            column += line[byte_pos..m.start()].chars().count();
            let start = column;
            column += m.as_str().chars().count();
            byte_pos = m.end();

            spans.push(MatchSpan {
                text: m.as_str().to_string(),
                range: ColumnRange::new(start, column),
            });
        }

        spans
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod pattern_tests;
