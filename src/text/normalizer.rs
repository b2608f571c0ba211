//! Text normalization for preprocessing.

use crate::config::TextConfig;
use std::borrow::Cow;
use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};

/// Text normalizer applied to raw input before tokenization.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: TextConfig,
}

impl Normalizer {
    /// Creates a new normalizer with the given configuration.
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    /// Creates a normalizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(TextConfig::default())
    }

    /// Normalizes text to NFC when enabled.
    ///
    /// Text that is already composed is returned borrowed.
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !self.config.unicode_normalize {
            return Cow::Borrowed(text);
        }

        match is_nfc_quick(text.chars()) {
            IsNormalized::Yes => Cow::Borrowed(text),
            _ => Cow::Owned(text.nfc().collect()),
        }
    }
}
