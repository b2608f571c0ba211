//! The keyword extraction pipeline.
//!
//! [`KeywordExtractor`] composes the stages in order:
//!
//! 1. [`Tokenizer`] splits the text on non-letter runs and lowercases it
//! 2. [`TokenFilter`] drops short, foreign-script and stop-word tokens
//! 3. [`FrequencyTable`] counts the survivors in first-occurrence order
//! 4. [`Ranker`] sorts by descending count and keeps the top entries
//!
//! Extraction never fails. [`KeywordExtractor::analyze`] classifies the
//! result for callers that need to report blank input or an empty result.

use crate::config::Config;
use crate::error::Result;
use crate::filter::{CharacterPolicy, StopWordSet, TokenFilter};
use crate::frequency::FrequencyTable;
use crate::rank::{Keyword, KeywordResult, Ranker};
use crate::text::Tokenizer;
use log::{debug, trace, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Extracts the most frequent significant words from text.
///
/// The extractor holds only immutable configuration, so a single instance
/// can be shared between threads and called concurrently.
#[derive(Debug, Clone, Default)]
pub struct KeywordExtractor {
    tokenizer: Tokenizer,
    filter: TokenFilter,
    ranker: Ranker,
}

impl KeywordExtractor {
    /// Creates an extractor with the given stop words and default settings.
    pub fn new(stop_words: StopWordSet) -> Self {
        Self {
            tokenizer: Tokenizer::default_config(),
            filter: TokenFilter::new(stop_words),
            ranker: Ranker::default(),
        }
    }

    /// Builds an extractor from a validated configuration.
    ///
    /// Stop words are the language list (or the built-in Portuguese list when
    /// no language is set), merged with the stop-word file and the extra words.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let ext = &config.extractor;
        for warning in ext.warnings() {
            warn!("{}", warning);
        }

        let mut stop_words = match &ext.language {
            Some(language) => StopWordSet::for_language(language)?,
            None => StopWordSet::portuguese(),
        };
        if let Some(path) = &ext.stop_words_file {
            stop_words = stop_words.union(&StopWordSet::from_file(path)?);
        }
        if !ext.extra_stop_words.is_empty() {
            stop_words = stop_words.union(&StopWordSet::from_words(&ext.extra_stop_words));
        }

        let policy = if ext.any_letter {
            CharacterPolicy::any_letter()
        } else {
            CharacterPolicy::with_extra_letters(&ext.accented_letters)
        };

        debug!(
            "Extractor configured: {} stop words, max_results={}, min_length={}",
            stop_words.len(),
            ext.max_results,
            ext.min_length
        );

        Ok(Self {
            tokenizer: Tokenizer::new(config.text.clone()),
            filter: TokenFilter::new(stop_words)
                .with_policy(policy)
                .with_min_length(ext.min_length),
            ranker: Ranker::new(ext.max_results),
        })
    }

    /// Set the maximum number of keywords returned.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.ranker = Ranker::new(max_results);
        self
    }

    /// Set the minimum keyword length in characters.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.filter = self.filter.with_min_length(min_length);
        self
    }

    /// Set the accepted-character policy.
    pub fn with_policy(mut self, policy: CharacterPolicy) -> Self {
        self.filter = self.filter.with_policy(policy);
        self
    }

    /// Replace the stop-word set.
    pub fn with_stop_words(mut self, stop_words: StopWordSet) -> Self {
        self.filter = self.filter.with_stop_words(stop_words);
        self
    }

    /// Set the tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Returns the stop-word set.
    pub fn stop_words(&self) -> &StopWordSet {
        self.filter.stop_words()
    }

    /// Maximum number of keywords returned.
    pub fn max_results(&self) -> usize {
        self.ranker.max_results()
    }

    /// Minimum keyword length in characters.
    pub fn min_length(&self) -> usize {
        self.filter.min_length()
    }

    /// Splits text into lowercase tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize(text)
    }

    /// Keeps the tokens that qualify as keywords.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        self.filter.filter(tokens)
    }

    /// Counts the qualifying tokens of `text`.
    pub fn count(&self, text: &str) -> FrequencyTable {
        FrequencyTable::count(self.filter(self.tokenize(text)))
    }

    /// Extracts the top keywords from `text`.
    pub fn extract(&self, text: &str) -> KeywordResult {
        let tokens = self.tokenize(text);
        let token_count = tokens.len();

        let table = FrequencyTable::count(self.filter(tokens));
        trace!(
            "{} fragments, {} distinct keywords ({} occurrences)",
            token_count,
            table.len(),
            table.total()
        );

        self.ranker.rank(table)
    }

    /// Extracts keywords from many independent documents in parallel.
    ///
    /// Results are returned in input order.
    pub fn extract_batch<S>(&self, texts: &[S]) -> Vec<KeywordResult>
    where
        S: AsRef<str> + Sync,
    {
        debug!("Extracting keywords from {} documents", texts.len());
        texts.par_iter().map(|t| self.extract(t.as_ref())).collect()
    }

    /// Extracts keywords and classifies the outcome.
    ///
    /// Blank input short-circuits without running the pipeline.
    pub fn analyze(&self, text: &str) -> Outcome {
        if text.trim().is_empty() {
            return Outcome::BlankInput;
        }

        Outcome::from_keywords(self.extract(text))
    }
}

/// Extracts up to `max_results` keywords of at least `min_length` characters,
/// using the default tokenizer and character policy.
pub fn extract_keywords(
    text: &str,
    stop_words: &StopWordSet,
    max_results: usize,
    min_length: usize,
) -> KeywordResult {
    KeywordExtractor::new(stop_words.clone())
        .with_max_results(max_results)
        .with_min_length(min_length)
        .extract(text)
}

/// A non-empty keyword result with its summary figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordReport {
    /// Ranked keywords.
    pub keywords: KeywordResult,
    /// Sum of the reported frequencies.
    pub total_frequency: usize,
}

impl KeywordReport {
    /// Creates a report for the given keywords.
    pub fn new(keywords: KeywordResult) -> Self {
        let total_frequency = keywords.iter().map(|k| k.frequency).sum();
        Self {
            keywords,
            total_frequency,
        }
    }

    /// Human-readable summary line.
    pub fn summary(&self) -> String {
        format!(
            "Found {} top keywords from a total of {} analysed words.",
            self.keywords.len(),
            self.total_frequency
        )
    }
}

/// The classified result of [`KeywordExtractor::analyze`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The input was empty or whitespace only.
    BlankInput,
    /// Nothing survived filtering.
    NoKeywords,
    /// At least one keyword was found.
    Keywords(KeywordReport),
}

impl Outcome {
    /// Classifies an extraction result for non-blank input.
    pub fn from_keywords(keywords: KeywordResult) -> Self {
        if keywords.is_empty() {
            Outcome::NoKeywords
        } else {
            Outcome::Keywords(KeywordReport::new(keywords))
        }
    }

    /// The keywords found, empty for the other outcomes.
    pub fn keywords(&self) -> &[Keyword] {
        match self {
            Outcome::Keywords(report) => &report.keywords,
            _ => &[],
        }
    }

    /// Message to show the user for this outcome.
    pub fn message(&self) -> String {
        match self {
            Outcome::BlankInput => "Please enter some text to analyse.".to_string(),
            Outcome::NoKeywords => "No significant keywords were found in the text.".to_string(),
            Outcome::Keywords(report) => report.summary(),
        }
    }
}
