//! Classifier configuration.
//!
//! Configuration is passed explicitly to [`LexiconStore::load`](crate::LexiconStore::load)
//! and [`Classifier`](crate::Classifier); nothing is looked up globally.
//!
//! # Example
//!
//! ```rust
//! use sentilex::{ListKind, SentimentConfig};
//! use sentilex_core::Category;
//!
//! let config = SentimentConfig::from_json_str(r#"{
//!     "max_token_length": 15,
//!     "data_folder": "sentiment/ar",
//!     "types": { "positive": "pos" }
//! }"#).unwrap();
//!
//! assert_eq!(config.min_token_length, 1);
//! assert_eq!(
//!     config.resolve_path(ListKind::Category(Category::Positive)),
//!     "sentiment/ar/data.pos.json"
//! );
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sentilex_core::Category;

use crate::tokenize::Normalization;
use crate::{Error, Result};

/// A word list the lexicon store knows how to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Dictionary for one sentiment category. Required.
    Category(Category),
    /// Tokens never scored. Optional.
    Ignore,
    /// Negation prefixes. Optional.
    Prefix,
}

impl ListKind {
    /// Every list, categories first, in load order.
    pub const ALL: [ListKind; 6] = [
        ListKind::Category(Category::Positive),
        ListKind::Category(Category::Negative),
        ListKind::Category(Category::Neutral),
        ListKind::Category(Category::Question),
        ListKind::Ignore,
        ListKind::Prefix,
    ];

    /// Key used in `data_files`.
    #[must_use]
    pub fn as_label(&self) -> &'static str {
        match self {
            ListKind::Category(c) => c.as_label(),
            ListKind::Ignore => "ignore",
            ListKind::Prefix => "prefix",
        }
    }

    /// True for the auxiliary (ignore, prefix) lists.
    #[must_use]
    pub fn is_auxiliary(&self) -> bool {
        !matches!(self, ListKind::Category(_))
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Options consumed by the lexicon store and the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    /// Tokens shorter than this (in chars) are not scored.
    pub min_token_length: usize,
    /// Tokens longer than this (in chars) are not scored.
    pub max_token_length: usize,
    /// Base path for cached dictionaries.
    pub data_folder: String,
    /// Explicit storage path per list kind (`positive`, ..., `ignore`, `prefix`).
    pub data_files: BTreeMap<String, String>,
    /// On-disk short code per category, e.g. `positive` -> `pos`.
    pub types: BTreeMap<Category, String>,
    /// Character filtering applied before tokenization.
    pub normalization: Normalization,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            min_token_length: 1,
            max_token_length: 40,
            data_folder: "sentiment".to_string(),
            data_files: BTreeMap::new(),
            types: BTreeMap::new(),
            normalization: Normalization::default(),
        }
    }
}

impl SentimentConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::configuration(format!("invalid configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check the token length bounds.
    pub fn validate(&self) -> Result<()> {
        if self.min_token_length == 0 {
            return Err(Error::configuration("min_token_length must be at least 1"));
        }
        if self.min_token_length > self.max_token_length {
            return Err(Error::configuration(format!(
                "min_token_length ({}) exceeds max_token_length ({})",
                self.min_token_length, self.max_token_length
            )));
        }
        Ok(())
    }

    /// Set the token length bounds.
    #[must_use]
    pub fn with_token_lengths(mut self, min: usize, max: usize) -> Self {
        self.min_token_length = min;
        self.max_token_length = max;
        self
    }

    /// Set the base folder for cached dictionaries.
    #[must_use]
    pub fn with_data_folder(mut self, folder: impl Into<String>) -> Self {
        self.data_folder = folder.into();
        self
    }

    /// Map a list kind to an explicit storage path.
    #[must_use]
    pub fn with_data_file(mut self, kind: ListKind, path: impl Into<String>) -> Self {
        self.data_files.insert(kind.as_label().to_string(), path.into());
        self
    }

    /// Set the on-disk short code for a category.
    #[must_use]
    pub fn with_type_code(mut self, category: Category, code: impl Into<String>) -> Self {
        self.types.insert(category, code.into());
        self
    }

    /// Select the character normalization.
    #[must_use]
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Short code used in file names for a list kind.
    #[must_use]
    pub fn code_for(&self, kind: ListKind) -> &str {
        match kind {
            ListKind::Category(c) => self.types.get(&c).map_or(c.as_label(), String::as_str),
            other => other.as_label(),
        }
    }

    /// Storage path of a list: the explicit `data_files` entry, or
    /// `{data_folder}/data.{code}.json`.
    #[must_use]
    pub fn resolve_path(&self, kind: ListKind) -> String {
        if let Some(path) = self.data_files.get(kind.as_label()) {
            return path.clone();
        }
        let file = format!("data.{}.json", self.code_for(kind));
        let folder = self.data_folder.trim_end_matches('/');
        if folder.is_empty() {
            file
        } else {
            format!("{folder}/{file}")
        }
    }

    /// Whether a token of `len` chars is inside the scoring bounds.
    #[must_use]
    #[inline]
    pub fn accepts_length(&self, len: usize) -> bool {
        len >= self.min_token_length && len <= self.max_token_length
    }
}
