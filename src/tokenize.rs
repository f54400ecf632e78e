//! Text normalization and tokenization.
//!
//! Tokenization is a fixed pipeline with one pluggable step:
//!
//! 1. Line endings (`\r\n`, `\r`, `\n`) become a single space.
//! 2. A [`TextNormalizer`] removes unwanted characters and lower-cases.
//! 3. The result is split on single spaces; empty pieces are dropped.
//!
//! Two normalizers ship with the crate, selected through [`Normalization`]:
//!
//! | Mode | Keeps | Removes |
//! |------|-------|---------|
//! | `ArabicLatin` | Arabic letters (U+0621..U+064A), ASCII letters, space | everything else, then punctuation |
//! | `StripDigits` | everything but digits | decimal digits of any script |

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// These patterns are compile-time constants; an invalid one is a programmer error.
static LINE_ENDINGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("LINE_ENDINGS regex is invalid"));
static OUTSIDE_ARABIC_LATIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\x{0621}-\x{064A}A-Za-z ]+").expect("OUTSIDE_ARABIC_LATIN regex is invalid")
});
static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{P}+").expect("PUNCTUATION regex is invalid"));
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("DIGITS regex is invalid"));

/// Character filtering step of the tokenizer.
///
/// Implementations receive text whose line endings are already spaces and
/// must return lower-cased text; splitting happens afterwards.
pub trait TextNormalizer: Send + Sync {
    /// Filter and lower-case `text`.
    fn normalize(&self, text: &str) -> String;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Keeps Arabic and Latin letters and spaces only, then strips punctuation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArabicLatinFilter;

impl TextNormalizer for ArabicLatinFilter {
    fn normalize(&self, text: &str) -> String {
        let kept = OUTSIDE_ARABIC_LATIN.replace_all(text, "");
        let lowered = kept.to_lowercase();
        PUNCTUATION.replace_all(&lowered, "").into_owned()
    }

    fn name(&self) -> &'static str {
        "arabic_latin"
    }
}

/// Strips digits and leaves every other character intact.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigitStripper;

impl TextNormalizer for DigitStripper {
    fn normalize(&self, text: &str) -> String {
        DIGITS.replace_all(text, "").to_lowercase()
    }

    fn name(&self) -> &'static str {
        "strip_digits"
    }
}

/// Built-in normalization modes, selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// See [`ArabicLatinFilter`].
    #[default]
    ArabicLatin,
    /// See [`DigitStripper`].
    StripDigits,
}

impl Normalization {
    /// The normalizer implementing this mode.
    #[must_use]
    pub fn normalizer(self) -> Arc<dyn TextNormalizer> {
        match self {
            Normalization::ArabicLatin => Arc::new(ArabicLatinFilter),
            Normalization::StripDigits => Arc::new(DigitStripper),
        }
    }
}

/// Splits text into lower-cased tokens.
///
/// ```rust
/// use sentilex::Tokenizer;
///
/// let tokens = Tokenizer::default().tokenize("Not GOOD, at all!\r\nWhy?");
/// assert_eq!(tokens, vec!["not", "good", "at", "all", "why"]);
/// ```
#[derive(Clone)]
pub struct Tokenizer {
    normalizer: Arc<dyn TextNormalizer>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(Normalization::default())
    }
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("normalizer", &self.normalizer.name())
            .finish()
    }
}

impl Tokenizer {
    /// Tokenizer for a built-in normalization mode.
    #[must_use]
    pub fn new(normalization: Normalization) -> Self {
        Self {
            normalizer: normalization.normalizer(),
        }
    }

    /// Tokenizer with a caller-supplied normalizer.
    #[must_use]
    pub fn with_normalizer(normalizer: Arc<dyn TextNormalizer>) -> Self {
        Self { normalizer }
    }

    /// Name of the active normalizer.
    #[must_use]
    pub fn normalizer_name(&self) -> &'static str {
        self.normalizer.name()
    }

    /// Tokenize `text`. Token positions are 0-based and preserved.
    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let spaced = LINE_ENDINGS.replace_all(text, " ");
        self.normalizer
            .normalize(&spaced)
            .split(' ')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}
