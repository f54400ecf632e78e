//! Negation fusion.
//!
//! When a negation prefix is immediately followed by a polar word, the two
//! tokens are fused into one phrase (`"not good"`) that counts for the
//! opposite category:
//!
//! ```text
//! tokens:  ["this", "is", "not", "good"]      prefixes: ["not"]
//!                          ^^^^^  ^^^^        "good" is positive
//! fused:   ["this", "is", "not good"]         "not good" -> negative
//! ```
//!
//! A prefix followed by a negative word fuses into a positive phrase
//! (`"not bad"`). Fused phrases are recorded in a per-call [`NegationOverlay`]
//! instead of the shared lexicon, so the [`LexiconStore`] stays immutable.
//! Later prefixes see earlier fusions: with prefixes `["not", "no"]`,
//! `"no not good"` fuses to the positive phrase `"no not good"`.

use std::collections::BTreeSet;

use sentilex_core::Category;

use crate::lexicon::LexiconStore;

/// Phrases synthesized while fusing one token sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NegationOverlay {
    negated: Vec<String>,
    inverted: Vec<String>,
}

impl NegationOverlay {
    /// Whether `token` is a fused phrase counted for `category`.
    #[must_use]
    pub fn contains(&self, category: Category, token: &str) -> bool {
        match category {
            Category::Negative => self.negated.iter().any(|p| p == token),
            Category::Positive => self.inverted.iter().any(|p| p == token),
            Category::Neutral | Category::Question => false,
        }
    }

    /// Prefix + positive word phrases, now counted as negative.
    #[must_use]
    pub fn negated(&self) -> &[String] {
        &self.negated
    }

    /// Prefix + negative word phrases, now counted as positive.
    #[must_use]
    pub fn inverted(&self) -> &[String] {
        &self.inverted
    }

    /// True when nothing was fused.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.negated.is_empty() && self.inverted.is_empty()
    }

    fn record(&mut self, category: Category, phrase: &str) {
        let list = match category {
            Category::Negative => &mut self.negated,
            _ => &mut self.inverted,
        };
        list.push(phrase.to_string());
    }
}

/// Known to `category` either in the base lexicon or as an earlier fusion.
fn knows(store: &LexiconStore, overlay: &NegationOverlay, category: Category, token: &str) -> bool {
    store.contains(category, token) || overlay.contains(category, token)
}

/// Fuse every negation prefix with the polar token that follows it.
///
/// Prefixes are processed in list order. For each occurrence of a prefix, a
/// following positive token yields a negative phrase and a following negative
/// token yields a positive phrase (a token in both dictionaries yields both).
/// The prefix slot takes the phrase and the absorbed token is removed once
/// all prefixes are processed.
#[must_use]
pub fn fuse(mut tokens: Vec<String>, store: &LexiconStore) -> (Vec<String>, NegationOverlay) {
    let mut overlay = NegationOverlay::default();
    let mut absorbed = BTreeSet::new();

    for prefix in store.prefixes() {
        let positions: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| *t == prefix)
            .map(|(i, _)| i)
            .collect();

        for index in positions {
            let Some(next) = tokens.get(index + 1) else {
                continue;
            };
            let phrase = format!("{prefix} {next}");
            let mut fused = false;
            for polar in [Category::Positive, Category::Negative] {
                if knows(store, &overlay, polar, next) {
                    if let Some(opposite) = polar.opposite() {
                        overlay.record(opposite, &phrase);
                        fused = true;
                    }
                }
            }
            if fused {
                absorbed.insert(index + 1);
                tokens[index] = phrase;
            }
        }
    }

    // Highest index first so earlier removals do not shift later ones.
    for index in absorbed.into_iter().rev() {
        tokens.remove(index);
    }
    (tokens, overlay)
}
