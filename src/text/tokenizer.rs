//! Tokenization for keyword extraction.

use crate::config::TextConfig;
use crate::text::Normalizer;
use once_cell::sync::Lazy;
use regex::Regex;

// Any run of characters outside the Unicode letter class separates tokens.
static NON_LETTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\P{L}+").unwrap());

/// Tokenizer that splits text on non-letter runs and lowercases each fragment.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    normalizer: Normalizer,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Tokenizer {
    /// Creates a new tokenizer with the given configuration.
    pub fn new(config: TextConfig) -> Self {
        Self {
            normalizer: Normalizer::new(config),
        }
    }

    /// Creates a tokenizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(TextConfig::default())
    }

    /// Tokenizes text into lowercase letter runs, in input order.
    ///
    /// Separators at the start or end of the text produce empty fragments.
    /// They are kept here and dropped by [`crate::TokenFilter`].
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = self.normalizer.normalize(text);
        NON_LETTERS
            .split(&text)
            .map(|fragment| fragment.to_lowercase())
            .collect()
    }
}
