//! Token filtering: minimum length, accepted characters and stop words.

mod policy;
mod stopwords;

pub use policy::CharacterPolicy;
pub use stopwords::{StopWordSet, PORTUGUESE};

/// Keeps the tokens that qualify as keyword candidates.
///
/// A token is kept iff it has at least `min_length` characters, every
/// character is accepted by the [`CharacterPolicy`], and it is not in the
/// [`StopWordSet`]. Filtering preserves order and is idempotent.
#[derive(Debug, Clone)]
pub struct TokenFilter {
    stop_words: StopWordSet,
    policy: CharacterPolicy,
    min_length: usize,
}

impl Default for TokenFilter {
    fn default() -> Self {
        Self::new(StopWordSet::default())
    }
}

impl TokenFilter {
    /// Creates a filter with the given stop words and default policy and length.
    pub fn new(stop_words: StopWordSet) -> Self {
        Self {
            stop_words,
            policy: CharacterPolicy::default(),
            min_length: crate::DEFAULT_MIN_LENGTH,
        }
    }

    /// Set the minimum token length, counted in characters.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Set the accepted-character policy.
    pub fn with_policy(mut self, policy: CharacterPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the stop-word set.
    pub fn with_stop_words(mut self, stop_words: StopWordSet) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Returns the stop-word set.
    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    /// Returns the character policy.
    pub fn policy(&self) -> &CharacterPolicy {
        &self.policy
    }

    /// Returns the minimum token length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Returns true if the token qualifies as a keyword candidate.
    pub fn keep(&self, token: &str) -> bool {
        // Byte length is an upper bound on the character count.
        if token.len() < self.min_length || token.chars().count() < self.min_length {
            return false;
        }
        self.policy.accepts(token) && !self.stop_words.contains(token)
    }

    /// Filters a token sequence, preserving order.
    pub fn filter<I>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        tokens.into_iter().filter(|t| self.keep(t)).collect()
    }
}
