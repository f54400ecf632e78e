//! Classifier engine: text -> scores and keyword evidence.
//!
//! # Pipeline
//!
//! ```text
//! text ─▶ tokenize ─▶ negation fusion ─▶ count matches ─▶ normalize ─▶ tie-break
//!                          │                   ▲
//!                          └── overlay ────────┘
//! ```
//!
//! # Scoring
//!
//! Each category starts at [`INITIAL_COUNT`]. For every category and every
//! token that passes the length bounds and is not ignored, an exact match in
//! that category's dictionary (or negation overlay) adds one to the category
//! and to the total. With a nonzero total, each category becomes
//! `count / total` rounded to 3 decimals; with a zero total, counts are left
//! as they are (all zero).
//!
//! Finally, if positive is nonzero and exactly equal to negative, negative
//! gains 0.01 and positive loses 0.01, so a literal polarity tie is decided
//! for negative. Every other tie goes to the category declared first.
//!
//! The engine holds no per-call state: [`Classifier::classify`] takes `&self`
//! and a `Classifier` can be shared across threads.

use sentilex_core::{round_to, Category, KeywordEvidence, ScoreVector};

use crate::config::SentimentConfig;
use crate::lexicon::LexiconStore;
use crate::negation::{self, NegationOverlay};
use crate::session::Session;
use crate::storage::Storage;
use crate::tokenize::Tokenizer;
use crate::Result;

/// Starting count of every category before matching.
pub const INITIAL_COUNT: u32 = 0;

/// Decimal places of the normalized scores.
pub const SCORE_PRECISION: u32 = 3;

/// Outcome of classifying one text.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    tokens: Vec<String>,
    scores: ScoreVector,
    keywords: KeywordEvidence,
    total_score: u32,
    overlay: NegationOverlay,
    tie_adjusted: bool,
}

impl Classification {
    /// Winning category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.scores.winner()
    }

    /// Normalized, tie-adjusted scores.
    #[must_use]
    pub fn scores(&self) -> &ScoreVector {
        &self.scores
    }

    /// Score of the winning category.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.scores.max()
    }

    /// Matched tokens and phrases per category.
    #[must_use]
    pub fn keywords(&self) -> &KeywordEvidence {
        &self.keywords
    }

    /// Tokens after negation fusion.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of matches across all categories.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Fused phrases counted as negative (`"not good"`).
    #[must_use]
    pub fn negated_phrases(&self) -> &[String] {
        self.overlay.negated()
    }

    /// Fused phrases counted as positive (`"not bad"`).
    #[must_use]
    pub fn inverted_phrases(&self) -> &[String] {
        self.overlay.inverted()
    }

    /// Whether the positive/negative tie-break changed the scores.
    #[must_use]
    pub fn tie_adjusted(&self) -> bool {
        self.tie_adjusted
    }
}

/// Lexicon-based sentiment classifier.
///
/// ```rust
/// use sentilex::{Classifier, LexiconStore, SentimentConfig};
/// use sentilex_core::Category;
///
/// let store = LexiconStore::new()
///     .with_words(Category::Positive, ["good", "great"])
///     .with_words(Category::Negative, ["bad"])
///     .with_words(Category::Question, ["why"])
///     .with_prefixes(["not"]);
/// let classifier = Classifier::from_store(SentimentConfig::default(), store).unwrap();
///
/// let result = classifier.classify("This is not good");
/// assert_eq!(result.category(), Category::Negative);
/// assert_eq!(result.keywords().get(Category::Negative), ["not good"]);
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    config: SentimentConfig,
    lexicon: LexiconStore,
    tokenizer: Tokenizer,
}

impl Classifier {
    /// Load the lexicon named by `config` from `storage`.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid, a category dictionary is
    /// missing, or any list is malformed. Construction is not retried.
    pub fn new(config: SentimentConfig, storage: &dyn Storage) -> Result<Self> {
        config.validate()?;
        let lexicon = LexiconStore::load(&config, storage)?;
        Self::from_store(config, lexicon)
    }

    /// Classifier over an already built lexicon.
    ///
    /// # Errors
    ///
    /// `Error::Configuration` if `config` does not validate.
    pub fn from_store(config: SentimentConfig, lexicon: LexiconStore) -> Result<Self> {
        config.validate()?;
        let tokenizer = Tokenizer::new(config.normalization);
        Ok(Self {
            config,
            lexicon,
            tokenizer,
        })
    }

    /// Replace the tokenizer (e.g. with a custom normalizer).
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &SentimentConfig {
        &self.config
    }

    /// Loaded lexicon.
    #[must_use]
    pub fn lexicon(&self) -> &LexiconStore {
        &self.lexicon
    }

    /// Memoizing session over this classifier.
    #[must_use]
    pub fn session(&self) -> Session<'_> {
        Session::new(self)
    }

    /// Tokenize `text` without scoring it.
    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize(text)
    }

    /// Classify a text.
    #[must_use]
    pub fn classify(&self, text: &str) -> Classification {
        self.classify_tokens(self.tokenize(text))
    }

    /// Classify an already tokenized text. Negation fusion is applied here.
    #[must_use]
    pub fn classify_tokens(&self, tokens: Vec<String>) -> Classification {
        let (tokens, overlay) = negation::fuse(tokens, &self.lexicon);

        let mut counts = [INITIAL_COUNT; 4];
        let mut total_score = 0u32;
        let mut keywords = KeywordEvidence::new();

        for category in Category::ALL {
            for token in tokens.iter().filter(|t| self.is_scorable(t)) {
                if self.lexicon.contains(category, token) || overlay.contains(category, token) {
                    counts[category.index()] += 1;
                    keywords.push(category, token.as_str());
                    total_score += 1;
                }
            }
        }

        let mut scores = ScoreVector::zeroed();
        for category in Category::ALL {
            let count = f64::from(counts[category.index()]);
            let value = if total_score > 0 {
                round_to(count / f64::from(total_score), SCORE_PRECISION)
            } else {
                count
            };
            scores.set(category, value);
        }
        let tie_adjusted = scores.break_polarity_tie();

        log::debug!(
            "[Classifier] {} tokens, {} matches, {} fused, decision {}",
            tokens.len(),
            total_score,
            overlay.negated().len() + overlay.inverted().len(),
            scores.winner()
        );

        Classification {
            tokens,
            scores,
            keywords,
            total_score,
            overlay,
            tie_adjusted,
        }
    }

    /// Winning category for `text`.
    #[must_use]
    pub fn categorise(&self, text: &str) -> Category {
        self.classify(text).category()
    }

    fn is_scorable(&self, token: &str) -> bool {
        self.config.accepts_length(token.chars().count()) && !self.lexicon.is_ignored(token)
    }
}
