//! Stop-word sets.
//!
//! A [`StopWordSet`] is immutable once built. It is backed by an `Arc` so
//! extractors sharing the same list clone it cheaply.

use crate::error::{KeyfreqError, Result};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use stop_words::{get, LANGUAGE};

/// Built-in Portuguese function words. Used when no language is configured.
pub const PORTUGUESE: &[&str] = &[
    "de", "da", "do", "em", "a", "o", "e", "para", "com", "sem", "um", "uma", "os", "as", "no",
    "na", "que", "se", "por", "mais", "menos", "já", "vai", "foi", "são", "ser", "tem", "têm",
    "como", "ou", "até", "não", "sim", "eu", "você", "ele", "ela", "nós", "vocês", "eles", "elas",
    "me", "te", "lhe", "nos", "vos", "lhes", "isso", "isto", "aquilo", "muito", "bem", "só",
    "ainda", "também", "quando", "onde", "porque", "então", "mas", "porém", "contudo",
    "entretanto", "todavia",
];

/// An immutable set of lowercase words excluded from keyword results.
#[derive(Debug, Clone)]
pub struct StopWordSet {
    words: Arc<FxHashSet<String>>,
}

impl Default for StopWordSet {
    fn default() -> Self {
        Self::portuguese()
    }
}

impl StopWordSet {
    /// The built-in Portuguese list.
    pub fn portuguese() -> Self {
        Self::from_list(PORTUGUESE)
    }

    /// An empty set (nothing is excluded).
    pub fn empty() -> Self {
        Self::from_words(std::iter::empty::<&str>())
    }

    /// Creates a set from a custom list. Words are lowercased.
    pub fn from_list(words: &[&str]) -> Self {
        Self::from_words(words.iter().copied())
    }

    /// Creates a set from any sequence of words. Words are trimmed and
    /// lowercased; blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: FxHashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            words: Arc::new(words),
        }
    }

    /// Loads the stop-word list for a language code or English name.
    ///
    /// Supported: en, pt, es, fr, de, it, nl, ru, sv, no, da, fi, hu, tr, pl, ar.
    pub fn for_language(language: &str) -> Result<Self> {
        let lang = match language.trim().to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "es" | "spanish" => LANGUAGE::Spanish,
            "fr" | "french" => LANGUAGE::French,
            "de" | "german" => LANGUAGE::German,
            "it" | "italian" => LANGUAGE::Italian,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => return Err(KeyfreqError::UnknownLanguage(language.to_string())),
        };

        let words: Vec<String> = get(lang).iter().map(|s| s.to_string()).collect();
        log::debug!("Loaded {} stop words for '{}'", words.len(), language);
        Ok(Self::from_words(words))
    }

    /// Loads stop words from a file with one word per line.
    ///
    /// Blank lines and lines starting with `#` are ignored.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(KeyfreqError::FileNotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        let set = Self::from_words(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        );
        log::debug!("Loaded {} stop words from {}", set.len(), path.display());
        Ok(set)
    }

    /// Returns a new set containing the words of both sets.
    pub fn union(&self, other: &StopWordSet) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }

        let words: FxHashSet<String> = self.words.union(&other.words).cloned().collect();
        Self {
            words: Arc::new(words),
        }
    }

    /// Check if a word is a stop word.
    ///
    /// Mixed-case input is lowercased before the lookup. Pipeline tokens are
    /// already lowercase, so this only matters for direct callers.
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Get the number of stop words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the stop words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
