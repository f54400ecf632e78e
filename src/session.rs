//! Memoizing query facade over a [`Classifier`].
//!
//! A [`Session`] remembers the current text and the classification computed
//! for it. Every query method accepts an optional text: a non-empty one
//! replaces the current text (and clears the cache), `None` or `Some("")`
//! reuses it. Repeated queries on the same text classify once.
//!
//! ```rust
//! use sentilex::{Classifier, LexiconStore, SentimentConfig};
//! use sentilex_core::Category;
//!
//! let store = LexiconStore::new()
//!     .with_words(Category::Positive, ["good"])
//!     .with_words(Category::Negative, ["bad"]);
//! let classifier = Classifier::from_store(SentimentConfig::default(), store).unwrap();
//!
//! let mut session = classifier.session();
//! assert!(session.is_positive(Some("a good day")));
//! assert_eq!(session.score(None), 1.0);
//! assert!(session.is_negative(Some("a bad day")));
//! ```
//!
//! Sessions are cheap; use one per logical analysis instead of sharing one
//! between threads.

use sentilex_core::{Category, KeywordEvidence, ScoreVector};

use crate::classifier::{Classification, Classifier};

/// Precision of [`Session::scores`].
pub const REPORTED_PRECISION: u32 = 2;

static EMPTY_EVIDENCE: KeywordEvidence = KeywordEvidence::new();

/// Result of [`Session::scores_keywords`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeywordsView<'a> {
    /// Keywords of the requested category.
    Category(Category, &'a [String]),
    /// Keywords of every category (no category, or an unrecognized one, was requested).
    All(&'a KeywordEvidence),
}

impl<'a> KeywordsView<'a> {
    /// Keywords of one category, whichever form the view has.
    #[must_use]
    pub fn get(&self, category: Category) -> &'a [String] {
        match *self {
            KeywordsView::Category(c, keywords) if c == category => keywords,
            KeywordsView::Category(..) => &[],
            KeywordsView::All(evidence) => evidence.get(category),
        }
    }
}

/// Per-text cache of a classification, with convenience predicates.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    classifier: &'a Classifier,
    text: String,
    cached: Option<Classification>,
}

impl<'a> Session<'a> {
    /// Session with an empty text.
    #[must_use]
    pub fn new(classifier: &'a Classifier) -> Self {
        Self {
            classifier,
            text: String::new(),
            cached: None,
        }
    }

    /// Replace the current text and drop the cached classification.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self.cached = None;
        self
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether a classification is cached for the current text.
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }

    fn adopt(&mut self, text: Option<&str>) {
        if let Some(text) = text.filter(|t| !t.is_empty()) {
            self.set_text(text);
        }
    }

    /// Classification of the current text, computed on first use.
    pub fn classification(&mut self) -> &Classification {
        let classifier = self.classifier;
        let text = &self.text;
        self.cached.get_or_insert_with(|| classifier.classify(text))
    }

    /// Winning category.
    pub fn decision(&mut self, text: Option<&str>) -> Category {
        self.adopt(text);
        self.classification().category()
    }

    /// All four scores, rounded to two decimals.
    pub fn scores(&mut self, text: Option<&str>) -> ScoreVector {
        self.adopt(text);
        self.classification().scores().rounded(REPORTED_PRECISION)
    }

    /// Score of the winning category.
    pub fn score(&mut self, text: Option<&str>) -> f64 {
        self.adopt(text);
        self.classification().confidence()
    }

    /// Whether the decision is [`Category::Positive`].
    pub fn is_positive(&mut self, text: Option<&str>) -> bool {
        self.decision(text) == Category::Positive
    }

    /// Whether the decision is [`Category::Negative`].
    pub fn is_negative(&mut self, text: Option<&str>) -> bool {
        self.decision(text) == Category::Negative
    }

    /// Whether the decision is [`Category::Neutral`].
    pub fn is_neutral(&mut self, text: Option<&str>) -> bool {
        self.decision(text) == Category::Neutral
    }

    /// Whether the decision is [`Category::Question`].
    pub fn is_question(&mut self, text: Option<&str>) -> bool {
        self.decision(text) == Category::Question
    }

    /// Evidence of the last classification, empty if none was computed yet.
    #[must_use]
    pub fn evidence(&self) -> &KeywordEvidence {
        self.cached
            .as_ref()
            .map_or(&EMPTY_EVIDENCE, Classification::keywords)
    }

    /// Keywords of one category from the last classification.
    #[must_use]
    pub fn keywords(&self, category: Category) -> &[String] {
        self.evidence().get(category)
    }

    /// Keywords by category name; the whole evidence when `category` is
    /// `None` or not a known category.
    #[must_use]
    pub fn scores_keywords(&self, category: Option<&str>) -> KeywordsView<'_> {
        match category.and_then(Category::from_label) {
            Some(c) => KeywordsView::Category(c, self.keywords(c)),
            None => KeywordsView::All(self.evidence()),
        }
    }
}
