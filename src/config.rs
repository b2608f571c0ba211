//! Configuration for keyword extraction.

use crate::error::{KeyfreqError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration for keyfreq.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text processing configuration.
    pub text: TextConfig,

    /// Filtering and ranking configuration.
    pub extractor: ExtractorConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults, so a file containing only
    /// `{"extractor": {"max_results": 5}}` is valid.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(KeyfreqError::FileNotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that all values are usable.
    pub fn validate(&self) -> Result<()> {
        self.extractor.validate()
    }
}

/// Text processing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Apply Unicode normalization (NFC) before tokenizing, so that letters
    /// written with combining accents are kept whole.
    /// Default: true.
    pub unicode_normalize: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            unicode_normalize: true,
        }
    }
}

/// Filtering and ranking configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum number of keywords returned.
    /// Default: 10.
    pub max_results: usize,

    /// Minimum keyword length in characters.
    /// Default: 3.
    pub min_length: usize,

    /// Letters accepted in addition to ASCII `a-z`, case-insensitive.
    /// Default: the Portuguese accented letters.
    pub accented_letters: String,

    /// Accept any Unicode letter instead of ASCII plus `accented_letters`.
    /// Default: false.
    pub any_letter: bool,

    /// Stop-word language code (e.g. `"pt"`, `"en"`).
    /// Default: None (the built-in Portuguese list).
    pub language: Option<String>,

    /// File with additional stop words, one per line.
    /// Default: None.
    pub stop_words_file: Option<PathBuf>,

    /// Additional stop words.
    /// Default: empty.
    pub extra_stop_words: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_results: crate::DEFAULT_MAX_RESULTS,
            min_length: crate::DEFAULT_MIN_LENGTH,
            accented_letters: crate::DEFAULT_ACCENTED_LETTERS.to_string(),
            any_letter: false,
            language: None,
            stop_words_file: None,
            extra_stop_words: Vec::new(),
        }
    }
}

impl ExtractorConfig {
    /// Checks that all values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(KeyfreqError::Config(
                "max_results must be at least 1".to_string(),
            ));
        }
        if self.min_length == 0 {
            return Err(KeyfreqError::Config(
                "min_length must be at least 1".to_string(),
            ));
        }
        if !self.any_letter && self.accented_letters.chars().any(|c| !c.is_alphabetic()) {
            return Err(KeyfreqError::Config(format!(
                "accented_letters may only contain letters, got {:?}",
                self.accented_letters
            )));
        }
        Ok(())
    }

    /// Describes settings that are valid but probably unintended.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.any_letter && self.accented_letters != crate::DEFAULT_ACCENTED_LETTERS {
            warnings.push(format!(
                "accented_letters {:?} is ignored because any_letter is set",
                self.accented_letters
            ));
        }
        if self.min_length < crate::DEFAULT_MIN_LENGTH {
            warnings.push(format!(
                "min_length {} admits short function words; consider a stop-word list that covers them",
                self.min_length
            ));
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.extractor.max_results, 10);
        assert_eq!(config.extractor.min_length, 3);
        assert!(config.text.unicode_normalize);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "extractor": { "max_results": 5 } }"#).unwrap();
        assert_eq!(config.extractor.max_results, 5);
        assert_eq!(config.extractor.min_length, 3);
        assert_eq!(config.extractor.accented_letters, crate::DEFAULT_ACCENTED_LETTERS);
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let mut config = Config::default();
        config.extractor.max_results = 0;
        assert!(matches!(config.validate(), Err(KeyfreqError::Config(_))));

        let mut config = Config::default();
        config.extractor.min_length = 0;
        assert!(matches!(config.validate(), Err(KeyfreqError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_non_letters() {
        let mut config = Config::default();
        config.extractor.accented_letters = "é1".to_string();
        assert!(config.validate().is_err());

        config.extractor.any_letter = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_has_no_warnings() {
        assert!(ExtractorConfig::default().warnings().is_empty());
    }

    #[test]
    fn test_warnings_for_suspicious_settings() {
        let mut config = ExtractorConfig {
            any_letter: true,
            ..Default::default()
        };
        assert!(config.warnings().is_empty());

        config.accented_letters = "ß".to_string();
        let warnings = config.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("any_letter"));

        config.min_length = 2;
        let warnings = config.warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[1].contains("min_length 2"));

        config.min_length = 3;
        assert_eq!(config.warnings().len(), 1);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keyfreq.json");

        let mut config = Config::default();
        config.extractor.language = Some("en".to_string());
        config.extractor.extra_stop_words = vec!["lorem".to_string()];
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = Config::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(KeyfreqError::FileNotFound(_))));
    }

    #[test]
    fn test_load_invalid_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{ "extractor": { "min_length": 0 } }"#).unwrap();

        assert!(matches!(Config::load(&path), Err(KeyfreqError::Config(_))));
    }
}
