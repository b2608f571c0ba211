//! Accepted-character policy for keyword candidates.

use rustc_hash::FxHashSet;

/// Decides which characters a keyword may be composed of.
///
/// The default accepts ASCII letters plus the accented letters of Portuguese
/// (`á à â ã é è ê í ï ó ô õ ö ú ç ñ`). Matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterPolicy {
    /// ASCII letters plus a fixed set of extra letters, stored lowercase.
    Latin {
        /// Extra accepted letters.
        extra: FxHashSet<char>,
    },
    /// Any Unicode alphabetic character.
    AnyLetter,
}

impl Default for CharacterPolicy {
    fn default() -> Self {
        Self::with_extra_letters(crate::DEFAULT_ACCENTED_LETTERS)
    }
}

impl CharacterPolicy {
    /// ASCII letters only.
    pub fn ascii_only() -> Self {
        Self::Latin {
            extra: FxHashSet::default(),
        }
    }

    /// ASCII letters plus every letter in `letters`.
    ///
    /// Whitespace and separators in `letters` are ignored, so both `"áé"` and
    /// `"á é"` describe the same policy.
    pub fn with_extra_letters(letters: &str) -> Self {
        let extra = letters
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphabetic())
            .collect();
        Self::Latin { extra }
    }

    /// Any Unicode letter.
    pub fn any_letter() -> Self {
        Self::AnyLetter
    }

    /// Returns true if the character is accepted.
    pub fn accepts_char(&self, c: char) -> bool {
        match self {
            Self::Latin { extra } => {
                c.is_ascii_alphabetic()
                    || (c.is_alphabetic() && c.to_lowercase().all(|l| extra.contains(&l)))
            }
            Self::AnyLetter => c.is_alphabetic(),
        }
    }

    /// Returns true if the word is non-empty and every character is accepted.
    pub fn accepts(&self, word: &str) -> bool {
        !word.is_empty() && word.chars().all(|c| self.accepts_char(c))
    }
}
