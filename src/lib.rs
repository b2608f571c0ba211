//! # keyfreq - Keyword Frequency Extraction
//!
//! keyfreq finds the most frequent significant words in a piece of text.
//! Function words are removed with a configurable stop-word list, and the
//! survivors are ranked by how often they occur.
//!
//! ## Overview
//!
//! Extraction is a pure transformation:
//!
//! ```text
//! raw text -> tokens -> filtered tokens -> frequency table -> top-N keywords
//! ```
//!
//! Tokens are maximal runs of Unicode letters, lowercased. A token qualifies
//! when it is long enough, made only of accepted characters, and not a stop
//! word. Ties in frequency keep the order in which words first appeared.
//!
//! ## Quick Start
//!
//! ```rust
//! use keyfreq::{extract_keywords, Keyword, StopWordSet};
//!
//! let stop_words = StopWordSet::from_list(&["o", "e", "muito"]);
//! let keywords = extract_keywords(
//!     "O gato e o cachorro e o gato brincam muito",
//!     &stop_words,
//!     10,
//!     3,
//! );
//!
//! assert_eq!(keywords[0], Keyword::new("gato", 2));
//! assert_eq!(keywords.len(), 3);
//! ```
//!
//! ## Configuration
//!
//! ```rust,ignore
//! use keyfreq::{Config, KeywordExtractor, Outcome};
//!
//! let config = Config::load("keyfreq.json")?;
//! let extractor = KeywordExtractor::from_config(&config)?;
//!
//! match extractor.analyze(&text) {
//!     Outcome::Keywords(report) => println!("{}", report.summary()),
//!     other => println!("{}", other.message()),
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`text`] - Normalization, tokenization and input statistics
//! - [`filter`] - Stop words, character policy and the token filter
//! - [`frequency`] - Insertion-ordered frequency table
//! - [`rank`] - Stable ranking into the final keyword list
//! - [`extractor`] - The composed pipeline and outcome classification

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod extractor;
pub mod filter;
pub mod frequency;
pub mod rank;
pub mod text;

// Re-export commonly used types
pub use config::{Config, ExtractorConfig, TextConfig};
pub use error::{KeyfreqError, Result};
pub use extractor::{extract_keywords, KeywordExtractor, KeywordReport, Outcome};
pub use filter::{CharacterPolicy, StopWordSet, TokenFilter};
pub use frequency::FrequencyTable;
pub use rank::{Keyword, KeywordResult, Ranker};
pub use text::{Normalizer, TextStats, Tokenizer};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of keywords returned.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Default minimum keyword length in characters.
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Letters accepted by default in addition to ASCII `a-z`.
pub const DEFAULT_ACCENTED_LETTERS: &str = "áàâãéèêíïóôõöúçñ";
