//! Formatting options and their defaults

use serde::{Deserialize, Serialize};

pub const DEFAULT_FUZZY_LETTERS: usize = 5;
pub const DEFAULT_FUZZY_LEVEL: u32 = 1;

/// Query formatting options. Every field is optional; unset fields fall
/// back to [`Options::defaults`] when options are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Minimum word length (in characters) that turns on fuzzy matching.
    pub fuzzy_letters: Option<usize>,
    /// Edit distance appended to fuzzy words.
    pub fuzzy_level: Option<u32>,
    /// Word distance allowed inside the quoted phrase.
    pub proximity: Option<u32>,
    /// Percent-encode the finished query.
    pub url_encoded: Option<bool>,
    /// Bond date fields with `AND` instead of `OR`.
    pub strict_date_ranges: Option<bool>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in defaults with every field that has a default filled in.
    pub fn defaults() -> Self {
        Self {
            fuzzy_letters: Some(DEFAULT_FUZZY_LETTERS),
            fuzzy_level: Some(DEFAULT_FUZZY_LEVEL),
            proximity: None,
            url_encoded: Some(false),
            strict_date_ranges: Some(false),
        }
    }

    /// Returns `self` with every field set in `overrides` replaced.
    pub fn merge(&self, overrides: &Options) -> Options {
        Options {
            fuzzy_letters: overrides.fuzzy_letters.or(self.fuzzy_letters),
            fuzzy_level: overrides.fuzzy_level.or(self.fuzzy_level),
            proximity: overrides.proximity.or(self.proximity),
            url_encoded: overrides.url_encoded.or(self.url_encoded),
            strict_date_ranges: overrides.strict_date_ranges.or(self.strict_date_ranges),
        }
    }

    pub fn with_fuzzy_letters(mut self, letters: usize) -> Self {
        self.fuzzy_letters = Some(letters);
        self
    }

    pub fn with_fuzzy_level(mut self, level: u32) -> Self {
        self.fuzzy_level = Some(level);
        self
    }

    pub fn with_proximity(mut self, proximity: u32) -> Self {
        self.proximity = Some(proximity);
        self
    }

    pub fn with_url_encoded(mut self, encoded: bool) -> Self {
        self.url_encoded = Some(encoded);
        self
    }

    pub fn with_strict_date_ranges(mut self, strict: bool) -> Self {
        self.strict_date_ranges = Some(strict);
        self
    }

    pub fn is_url_encoded(&self) -> bool {
        self.url_encoded.unwrap_or(false)
    }

    pub fn is_strict_date_ranges(&self) -> bool {
        self.strict_date_ranges.unwrap_or(false)
    }

    pub fn phrase_options(&self) -> PhraseOptions {
        PhraseOptions {
            fuzzy_letters: self.fuzzy_letters.unwrap_or(DEFAULT_FUZZY_LETTERS),
            fuzzy_level: self.fuzzy_level.unwrap_or(DEFAULT_FUZZY_LEVEL),
            proximity: self.proximity,
        }
    }
}

/// The subset of options the phrase formatter reads, with defaults applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseOptions {
    pub fuzzy_letters: usize,
    pub fuzzy_level: u32,
    pub proximity: Option<u32>,
}

impl Default for PhraseOptions {
    fn default() -> Self {
        Options::defaults().phrase_options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::defaults();
        assert_eq!(options.fuzzy_letters, Some(5));
        assert_eq!(options.fuzzy_level, Some(1));
        assert!(options.proximity.is_none());
        assert!(!options.is_url_encoded());
        assert!(!options.is_strict_date_ranges());
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let merged = Options::defaults().merge(
            &Options::new()
                .with_fuzzy_letters(3)
                .with_proximity(2)
                .with_url_encoded(true),
        );

        assert_eq!(merged.fuzzy_letters, Some(3));
        assert_eq!(merged.fuzzy_level, Some(1));
        assert_eq!(merged.proximity, Some(2));
        assert!(merged.is_url_encoded());
    }

    #[test]
    fn test_merge_with_empty_keeps_base() {
        let base = Options::defaults().with_strict_date_ranges(true);
        assert_eq!(base.merge(&Options::new()), base);
    }

    #[test]
    fn test_partial_json() {
        let options: Options = serde_json::from_str(r#"{"fuzzyLevel": 2, "urlEncoded": true}"#).unwrap();
        assert_eq!(options.fuzzy_level, Some(2));
        assert!(options.fuzzy_letters.is_none());
        assert!(options.is_url_encoded());
    }

    #[test]
    fn test_phrase_options_fall_back_to_defaults() {
        let phrase = Options::new().with_proximity(4).phrase_options();
        assert_eq!(phrase.fuzzy_letters, DEFAULT_FUZZY_LETTERS);
        assert_eq!(phrase.fuzzy_level, DEFAULT_FUZZY_LEVEL);
        assert_eq!(phrase.proximity, Some(4));
    }
}
