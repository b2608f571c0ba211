//! Ranking of counted tokens into the final keyword list.

use crate::frequency::FrequencyTable;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;

/// A keyword and the number of times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Keyword {
    /// The lowercase keyword.
    pub word: String,
    /// Occurrence count (always at least 1).
    pub frequency: usize,
}

impl Keyword {
    /// Creates a new keyword.
    pub fn new(word: impl Into<String>, frequency: usize) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.frequency)
    }
}

/// Keywords ordered by descending frequency.
pub type KeywordResult = Vec<Keyword>;

/// Sorts a [`FrequencyTable`] by descending count and keeps the top entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranker {
    max_results: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(crate::DEFAULT_MAX_RESULTS)
    }
}

impl Ranker {
    /// Creates a ranker keeping at most `max_results` keywords.
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }

    /// Maximum number of keywords returned.
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Ranks the table.
    ///
    /// The sort is stable and keyed only on the count, so equal counts keep
    /// the table's first-occurrence order.
    pub fn rank(&self, table: FrequencyTable) -> KeywordResult {
        let mut keywords: Vec<Keyword> = table
            .into_iter()
            .map(|(word, frequency)| Keyword { word, frequency })
            .collect();

        keywords.sort_by_key(|k| Reverse(k.frequency));
        keywords.truncate(self.max_results);
        keywords
    }
}
