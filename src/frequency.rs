//! Frequency counting with first-occurrence ordering.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Occurrence counts per distinct token.
///
/// Keys keep the order in which each token was first seen, which the
/// [`crate::Ranker`] relies on to break ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: IndexMap<String, usize, FxBuildHasher>,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a token sequence.
    pub fn count<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.add(token);
        }
        table
    }

    /// Records one occurrence of `token`.
    pub fn add(&mut self, token: String) {
        *self.counts.entry(token).or_insert(0) += 1;
    }

    /// Returns the count for `word`, if it was seen.
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no token was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterates `(token, count)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }
}

impl FromIterator<String> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::count(iter)
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (String, usize);
    type IntoIter = indexmap::map::IntoIter<String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}
