//! A classifier is shared across threads; sessions are per thread.

use std::sync::Arc;
use std::thread;

use sentilex::{Classifier, LexiconStore, SentimentConfig};
use sentilex_core::Category;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn classifier_is_send_and_sync() {
    assert_send_sync::<Classifier>();
    assert_send_sync::<LexiconStore>();
}

#[test]
fn concurrent_classification_is_consistent() {
    let store = LexiconStore::new()
        .with_words(Category::Positive, ["good"])
        .with_words(Category::Negative, ["bad"])
        .with_words(Category::Question, ["why"])
        .with_prefixes(["not"]);
    let classifier = Arc::new(Classifier::from_store(SentimentConfig::default(), store).unwrap());

    let texts = ["not good", "good", "why", "good bad", "not bad"];
    let expected: Vec<_> = texts.iter().map(|t| classifier.classify(t)).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let classifier = Arc::clone(&classifier);
            thread::spawn(move || {
                let mut session = classifier.session();
                (0..50)
                    .flat_map(|_| texts)
                    .map(|t| {
                        session.set_text(t);
                        session.classification().clone()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let results = handle.join().unwrap();
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result, &expected[i % texts.len()]);
        }
    }

    // Fusion in other threads never touched the shared lexicon.
    assert!(!classifier.lexicon().contains(Category::Negative, "not good"));
    assert!(!classifier.lexicon().contains(Category::Positive, "not bad"));
}
