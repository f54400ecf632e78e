//! Property tests for tokenization and scoring invariants.

use proptest::prelude::*;
use sentilex::{Classifier, LexiconStore, Normalization, SentimentConfig, Tokenizer};
use sentilex_core::{Category, ScoreVector};

fn classifier() -> Classifier {
    let store = LexiconStore::new()
        .with_words(Category::Positive, ["good", "great"])
        .with_words(Category::Negative, ["bad"])
        .with_words(Category::Neutral, ["fine"])
        .with_words(Category::Question, ["why"])
        .with_prefixes(["not"]);
    Classifier::from_store(SentimentConfig::default(), store).unwrap()
}

const VOCAB: &[&str] = &["good", "great", "bad", "fine", "why", "not", "the", "movie"];
const POSITIVE: &[&str] = &["good", "great"];

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 0..12).prop_map(|w| w.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: tokenizing joined tokens gives the same tokens back.
    #[test]
    fn tokenization_is_idempotent(text in "[a-z ]{0,60}") {
        for mode in [Normalization::ArabicLatin, Normalization::StripDigits] {
            let tokenizer = Tokenizer::new(mode);
            let once = tokenizer.tokenize(&text);
            let twice = tokenizer.tokenize(&once.join(" "));
            prop_assert_eq!(once, twice);
        }
    }

    /// Property: tokens are never empty and never contain spaces or upper case.
    #[test]
    fn tokens_are_normalized(text in "\\PC{0,80}") {
        for token in Tokenizer::default().tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains(' '));
            prop_assert_eq!(token.to_lowercase(), token.clone());
        }
    }

    /// Property: text without lexicon words scores the zero baseline.
    #[test]
    fn unmatched_text_scores_baseline(text in "[qxz ]{0,40}") {
        let c = classifier().classify(&text);
        prop_assert_eq!(c.total_score(), 0);
        prop_assert_eq!(c.scores(), &ScoreVector::zeroed());
        prop_assert_eq!(c.category(), Category::Positive);
    }

    /// Property: scores stay in [0, 1] and sum to about 1 whenever anything matched.
    #[test]
    fn scores_form_a_distribution(text in sentence()) {
        let c = classifier().classify(&text);
        prop_assert_eq!(c.scores().iter().count(), 4);
        for (_, s) in c.scores().iter() {
            prop_assert!((0.0..=1.0).contains(&s), "score {} out of range", s);
        }
        if c.total_score() > 0 {
            prop_assert!((c.scores().total() - 1.0).abs() < 0.01);
        }
    }

    /// Property: evidence size equals the number of matches.
    #[test]
    fn evidence_matches_total(text in sentence()) {
        let c = classifier().classify(&text);
        prop_assert_eq!(c.keywords().len(), c.total_score() as usize);
    }

    /// Property: a decided category always has the maximum score.
    #[test]
    fn decision_has_max_score(text in sentence()) {
        let c = classifier().classify(&text);
        let best = c.scores().get(c.category());
        for (_, s) in c.scores().iter() {
            prop_assert!(s <= best);
        }
    }

    /// Property: a fused negation never also counts its positive word.
    #[test]
    fn negated_positive_is_not_positive_evidence(prefix in sentence(), word in prop::sample::select(POSITIVE)) {
        let text = format!("{prefix} not {word}");
        let c = classifier().classify(&text);
        let phrase = format!("not {word}");
        prop_assert!(c.keywords().get(Category::Negative).contains(&phrase));
        prop_assert!(!c.keywords().get(Category::Positive).contains(&phrase));
    }
}
