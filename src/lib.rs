//! # sentilex
//!
//! Lexicon-based sentiment classification for short texts.
//!
//! - **Lexicon store**: four category dictionaries (positive, negative,
//!   neutral, question) plus ignore and negation-prefix lists, loaded once
//!   from a [`Storage`]
//! - **Classifier**: tokenization, negation fusion, scoring into a
//!   normalized [`ScoreVector`], and the keywords behind each score
//! - **Session**: a memoizing facade with `decision` / `scores` / `is_positive` style queries
//!
//! ## Quick Start
//!
//! ```rust
//! use sentilex::{Classifier, MemoryStorage, SentimentConfig};
//! use sentilex_core::Category;
//!
//! let storage = MemoryStorage::new()
//!     .with_list("sentiment/data.positive.json", ["good", "great"])
//!     .with_list("sentiment/data.negative.json", ["bad"])
//!     .with_list("sentiment/data.neutral.json", Vec::<String>::new())
//!     .with_list("sentiment/data.question.json", ["why"])
//!     .with_list("sentiment/data.prefix.json", ["not"]);
//!
//! let classifier = Classifier::new(SentimentConfig::default(), &storage)?;
//! let mut session = classifier.session();
//!
//! assert_eq!(session.decision(Some("not good")), Category::Negative);
//! assert_eq!(session.keywords(Category::Negative), ["not good"]);
//! assert!(session.is_question(Some("why though")));
//! # Ok::<(), sentilex::Error>(())
//! ```
//!
//! ## Behaviour at a glance
//!
//! | Input | Scores | Decision |
//! |-------|--------|----------|
//! | `"not good"` | negative 1.0 | negative |
//! | `"good bad"` | positive 0.49, negative 0.51 | negative (polarity tie rule) |
//! | `""` | all 0 | positive (first declared) |
//!
//! ## Concurrency
//!
//! [`Classifier`] is immutable after construction and `Send + Sync`; share it
//! behind an `Arc`. [`Session`] holds per-text state and belongs to one caller.

#![warn(missing_docs)]

pub mod classifier;
pub mod config;
mod error;
pub mod lexicon;
pub mod maintenance;
pub mod negation;
pub mod session;
pub mod storage;
pub mod tokenize;

pub use classifier::{Classification, Classifier, INITIAL_COUNT, SCORE_PRECISION};
pub use config::{ListKind, SentimentConfig};
pub use error::{Error, Result};
pub use lexicon::{CategoryStats, Lexicon, LexiconStats, LexiconStore, WordList};
pub use negation::NegationOverlay;
pub use session::{KeywordsView, Session, REPORTED_PRECISION};
pub use storage::{FsStorage, MemoryStorage, Storage};
pub use tokenize::{ArabicLatinFilter, DigitStripper, Normalization, TextNormalizer, Tokenizer};

pub use sentilex_core::{Category, KeywordEvidence, ScoreVector};

pub mod prelude {
    //! Commonly used items, re-exported for convenience.
    //!
    //! ```rust
    //! use sentilex::prelude::*;
    //!
    //! let store = LexiconStore::new().with_words(Category::Question, ["how"]);
    //! let classifier = Classifier::from_store(SentimentConfig::default(), store).unwrap();
    //! assert_eq!(classifier.categorise("How?"), Category::Question);
    //! ```
    pub use crate::classifier::{Classification, Classifier};
    pub use crate::config::SentimentConfig;
    pub use crate::error::{Error, Result};
    pub use crate::lexicon::{Lexicon, LexiconStore};
    pub use crate::session::Session;
    pub use crate::storage::{FsStorage, MemoryStorage, Storage};
    pub use sentilex_core::{Category, KeywordEvidence, ScoreVector};
}
