//! The closed set of sentiment categories.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A sentiment category.
///
/// The declaration order is significant: when two categories hold the same
/// score, the one declared first wins (`Positive` before `Negative` before
/// `Neutral` before `Question`). [`Category::ALL`] iterates in that order.
///
/// # Example
///
/// ```rust
/// use sentilex_core::Category;
///
/// let c: Category = "Negative".parse().unwrap();
/// assert_eq!(c, Category::Negative);
/// assert_eq!(c.as_label(), "negative");
/// assert!(Category::from_label("sarcasm").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Favourable opinion.
    Positive,
    /// Unfavourable opinion.
    Negative,
    /// Neither favourable nor unfavourable.
    Neutral,
    /// The text asks something.
    Question,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 4] = [
        Category::Positive,
        Category::Negative,
        Category::Neutral,
        Category::Question,
    ];

    /// Position of this category in [`Category::ALL`].
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Category::Positive => 0,
            Category::Negative => 1,
            Category::Neutral => 2,
            Category::Question => 3,
        }
    }

    /// Lower-case label, as used in configuration keys and file names.
    #[must_use]
    pub const fn as_label(self) -> &'static str {
        match self {
            Category::Positive => "positive",
            Category::Negative => "negative",
            Category::Neutral => "neutral",
            Category::Question => "question",
        }
    }

    /// Parse a label case-insensitively. Returns `None` for anything outside the closed set.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "positive" => Some(Category::Positive),
            "negative" => Some(Category::Negative),
            "neutral" => Some(Category::Neutral),
            "question" => Some(Category::Question),
            _ => None,
        }
    }

    /// The category whose polarity is the inverse of this one, if any.
    ///
    /// Only positive and negative have an opposite; negation fusion relies on this.
    #[must_use]
    pub const fn opposite(self) -> Option<Self> {
        match self {
            Category::Positive => Some(Category::Negative),
            Category::Negative => Some(Category::Positive),
            Category::Neutral | Category::Question => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_label())
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s).ok_or_else(|| Error::unknown_category(s))
    }
}
