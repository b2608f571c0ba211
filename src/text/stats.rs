//! Input statistics shown alongside the text being analysed.

use serde::{Deserialize, Serialize};

/// Character and word counts for a piece of input text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Number of Unicode scalar values, including whitespace.
    pub characters: usize,
    /// Number of whitespace-delimited words.
    pub words: usize,
}

impl TextStats {
    /// Computes statistics for the given text.
    pub fn from_text(text: &str) -> Self {
        Self {
            characters: text.chars().count(),
            words: text.split_whitespace().count(),
        }
    }
}
