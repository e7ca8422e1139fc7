//! Keyword-based model configuration.
//!
//! A [`Dictionary`] maps keywords to [`Entry`] values: scalars, on/off
//! switches, words, and nested dictionaries. Models read their settings from
//! a dictionary and re-read them whenever the host asks.
//!
//! Dictionaries can be built in code or loaded from JSON:
//!
//! ```
//! use pans_models::support::dictionary::{Dictionary, Entry};
//!
//! let from_json = Dictionary::from_json_str(
//!     r#"{ "turbulentPrandtlModel": "zeroTransportModel", "printCoeffs": true }"#,
//! )
//! .unwrap();
//!
//! let built = Dictionary::new()
//!     .with("turbulentPrandtlModel", Entry::word("zeroTransportModel"))
//!     .with("printCoeffs", Entry::Switch(true));
//!
//! assert_eq!(from_json, built);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that may occur when looking up dictionary entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    /// A required keyword is absent.
    #[error("keyword {keyword:?} is undefined")]
    Missing { keyword: String },

    /// The keyword exists but holds a different kind of entry.
    #[error("keyword {keyword:?} should be a {expected}, found a {found}")]
    WrongType {
        keyword: String,
        expected: EntryKind,
        found: EntryKind,
    },

    /// The source text is not a valid dictionary.
    #[error("malformed dictionary: {context}")]
    Malformed { context: String },
}

/// The kind of value an [`Entry`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Scalar,
    Switch,
    Word,
    Dict,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Scalar => "scalar",
            Self::Switch => "switch",
            Self::Word => "word",
            Self::Dict => "dictionary",
        };
        f.write_str(name)
    }
}

/// A single dictionary value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Switch(bool),
    Scalar(f64),
    Word(String),
    Dict(Dictionary),
}

impl Entry {
    /// Creates a [`Entry::Word`] entry.
    #[must_use]
    pub fn word(word: impl Into<String>) -> Self {
        Self::Word(word.into())
    }

    #[must_use]
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Scalar(_) => EntryKind::Scalar,
            Self::Switch(_) => EntryKind::Switch,
            Self::Word(_) => EntryKind::Word,
            Self::Dict(_) => EntryKind::Dict,
        }
    }
}

impl From<f64> for Entry {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<bool> for Entry {
    fn from(value: bool) -> Self {
        Self::Switch(value)
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Self::word(value)
    }
}

impl From<Dictionary> for Entry {
    fn from(value: Dictionary) -> Self {
        Self::Dict(value)
    }
}

/// An ordered collection of keyword entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: BTreeMap<String, Entry>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a dictionary from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Malformed`] if the text is not a JSON object
    /// whose values are numbers, booleans, strings, or nested objects.
    pub fn from_json_str(text: &str) -> Result<Self, DictionaryError> {
        serde_json::from_str(text).map_err(|err| DictionaryError::Malformed {
            context: err.to_string(),
        })
    }

    /// Returns the dictionary with `entry` added under `keyword`.
    #[must_use]
    pub fn with(mut self, keyword: impl Into<String>, entry: impl Into<Entry>) -> Self {
        self.insert(keyword, entry);
        self
    }

    /// Adds or replaces the entry under `keyword`, returning the previous one.
    pub fn insert(&mut self, keyword: impl Into<String>, entry: impl Into<Entry>) -> Option<Entry> {
        self.entries.insert(keyword.into(), entry.into())
    }

    /// Removes the entry under `keyword`.
    pub fn remove(&mut self, keyword: &str) -> Option<Entry> {
        self.entries.remove(keyword)
    }

    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<&Entry> {
        self.entries.get(keyword)
    }

    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.entries.contains_key(keyword)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the keywords in sorted order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Looks up a required scalar.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError`] if the keyword is missing or not a scalar.
    pub fn scalar(&self, keyword: &str) -> Result<f64, DictionaryError> {
        match self.lookup(keyword)? {
            Entry::Scalar(value) => Ok(*value),
            other => Err(wrong_type(keyword, EntryKind::Scalar, other)),
        }
    }

    /// Looks up an optional scalar, falling back to `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::WrongType`] if the keyword is present but
    /// not a scalar.
    pub fn scalar_or(&self, keyword: &str, default: f64) -> Result<f64, DictionaryError> {
        if self.contains(keyword) {
            self.scalar(keyword)
        } else {
            Ok(default)
        }
    }

    /// Looks up a required switch.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError`] if the keyword is missing or not a switch.
    pub fn switch(&self, keyword: &str) -> Result<bool, DictionaryError> {
        match self.lookup(keyword)? {
            Entry::Switch(value) => Ok(*value),
            other => Err(wrong_type(keyword, EntryKind::Switch, other)),
        }
    }

    /// Looks up an optional switch, falling back to `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::WrongType`] if the keyword is present but
    /// not a switch.
    pub fn switch_or(&self, keyword: &str, default: bool) -> Result<bool, DictionaryError> {
        if self.contains(keyword) {
            self.switch(keyword)
        } else {
            Ok(default)
        }
    }

    /// Looks up a required word.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError`] if the keyword is missing or not a word.
    pub fn word(&self, keyword: &str) -> Result<&str, DictionaryError> {
        match self.lookup(keyword)? {
            Entry::Word(value) => Ok(value),
            other => Err(wrong_type(keyword, EntryKind::Word, other)),
        }
    }

    /// Looks up a required sub-dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError`] if the keyword is missing or not a dictionary.
    pub fn sub_dict(&self, keyword: &str) -> Result<&Dictionary, DictionaryError> {
        match self.lookup(keyword)? {
            Entry::Dict(value) => Ok(value),
            other => Err(wrong_type(keyword, EntryKind::Dict, other)),
        }
    }

    /// Looks up an optional sub-dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::WrongType`] if the keyword is present but
    /// not a dictionary.
    pub fn optional_sub_dict(&self, keyword: &str) -> Result<Option<&Dictionary>, DictionaryError> {
        if self.contains(keyword) {
            self.sub_dict(keyword).map(Some)
        } else {
            Ok(None)
        }
    }

    fn lookup(&self, keyword: &str) -> Result<&Entry, DictionaryError> {
        self.get(keyword).ok_or_else(|| DictionaryError::Missing {
            keyword: keyword.to_owned(),
        })
    }
}

fn wrong_type(keyword: &str, expected: EntryKind, found: &Entry) -> DictionaryError {
    DictionaryError::WrongType {
        keyword: keyword.to_owned(),
        expected,
        found: found.kind(),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn coefficients() -> Dictionary {
        Dictionary::new()
            .with("sigmaK", 1.0)
            .with("sigmaEps", 1.3)
            .with("enabled", true)
            .with("name", "kEpsilon")
    }

    #[test]
    fn typed_lookups() -> Result<(), DictionaryError> {
        let dict = coefficients();

        assert_relative_eq!(dict.scalar("sigmaEps")?, 1.3);
        assert!(dict.switch("enabled")?);
        assert_eq!(dict.word("name")?, "kEpsilon");
        Ok(())
    }

    #[test]
    fn missing_keyword_is_reported() {
        let dict = coefficients();
        assert_eq!(
            dict.scalar("sigmaOmega"),
            Err(DictionaryError::Missing {
                keyword: "sigmaOmega".to_owned()
            }),
        );
    }

    #[test]
    fn wrong_type_is_reported() {
        let dict = coefficients();
        assert_eq!(
            dict.scalar("name"),
            Err(DictionaryError::WrongType {
                keyword: "name".to_owned(),
                expected: EntryKind::Scalar,
                found: EntryKind::Word,
            }),
        );
        assert!(dict.sub_dict("sigmaK").is_err());
    }

    #[test]
    fn defaults_apply_only_when_absent() -> Result<(), DictionaryError> {
        let dict = coefficients();

        assert_relative_eq!(dict.scalar_or("sigmaOmega", 2.0)?, 2.0);
        assert_relative_eq!(dict.scalar_or("sigmaK", 2.0)?, 1.0);
        assert!(!dict.switch_or("printCoeffs", false)?);
        assert!(dict.switch_or("name", false).is_err());
        Ok(())
    }

    #[test]
    fn loads_nested_json() -> Result<(), DictionaryError> {
        let dict = Dictionary::from_json_str(
            r#"{
                "turbulentPrandtlModel": "constantTransportModel",
                "constantTransportModelCoeffs": { "sigmaK": 0.8 }
            }"#,
        )?;

        assert_eq!(dict.word("turbulentPrandtlModel")?, "constantTransportModel");
        let coeffs = dict.sub_dict("constantTransportModelCoeffs")?;
        assert_relative_eq!(coeffs.scalar("sigmaK")?, 0.8);
        assert_eq!(dict.optional_sub_dict("missingCoeffs")?, None);
        Ok(())
    }

    #[test]
    fn integers_load_as_scalars() -> Result<(), DictionaryError> {
        let dict = Dictionary::from_json_str(r#"{ "sigmaK": 1 }"#)?;
        assert_relative_eq!(dict.scalar("sigmaK")?, 1.0);
        Ok(())
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Dictionary::from_json_str("[1, 2, 3]"),
            Err(DictionaryError::Malformed { .. }),
        ));
        assert!(matches!(
            Dictionary::from_json_str(r#"{ "sigmaK": null }"#),
            Err(DictionaryError::Malformed { .. }),
        ));
    }
}
