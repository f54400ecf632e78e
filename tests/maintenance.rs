//! Regenerating cached dictionaries from source word lists.

use std::fs;
use std::path::Path;

use sentilex::maintenance::reload_dictionaries;
use sentilex::{Classifier, Error, FsStorage, MemoryStorage, SentimentConfig, Storage};
use sentilex_core::Category;

fn write_sources(dir: &Path, codes: &[(&str, &str)]) {
    for (code, body) in codes {
        fs::write(dir.join(format!("source.{code}.txt")), body).unwrap();
    }
}

#[test]
fn rebuilt_dictionaries_load_back() {
    let sources = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();
    write_sources(
        sources.path(),
        &[
            ("pos", "# positive\ngood\ngreat\n"),
            ("negative", "bad\n"),
            ("neutral", ""),
            ("question", "why\nhow\n"),
        ],
    );
    let config = SentimentConfig::default().with_type_code(Category::Positive, "pos");

    let written = reload_dictionaries(&config, sources.path(), data.path()).unwrap();
    assert_eq!(written.len(), 4);
    assert!(written[0].ends_with("sentiment/data.pos.json"));

    let storage = FsStorage::new(data.path()).unwrap();
    assert_eq!(
        storage.read("sentiment/data.question.json").unwrap(),
        br#"["why","how"]"#
    );
    let classifier = Classifier::new(config, &storage).unwrap();
    assert_eq!(classifier.categorise("how great"), Category::Positive);
    assert_eq!(classifier.lexicon().list(Category::Question).words(), ["why", "how"]);
}

#[test]
fn stale_cache_is_replaced() {
    let sources = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();
    let folder = data.path().join("sentiment");
    fs::create_dir_all(&folder).unwrap();
    fs::write(folder.join("data.negative.json"), r#"["old"]"#).unwrap();
    write_sources(
        sources.path(),
        &[
            ("positive", "good"),
            ("negative", "bad"),
            ("neutral", "fine"),
            ("question", "why"),
        ],
    );

    reload_dictionaries(&SentimentConfig::default(), sources.path(), data.path()).unwrap();
    let body = fs::read_to_string(folder.join("data.negative.json")).unwrap();
    assert_eq!(body, r#"["bad"]"#);
}

#[test]
fn missing_source_is_a_configuration_error() {
    let sources = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();
    write_sources(sources.path(), &[("positive", "good"), ("negative", "bad")]);

    let err = reload_dictionaries(&SentimentConfig::default(), sources.path(), data.path())
        .unwrap_err();
    match err {
        Error::Configuration(msg) => assert!(msg.contains("neutral"), "{msg}"),
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn missing_source_leaves_cache_untouched() {
    let sources = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();
    let folder = data.path().join("sentiment");
    fs::create_dir_all(&folder).unwrap();
    fs::write(folder.join("data.positive.json"), r#"["old"]"#).unwrap();
    write_sources(
        sources.path(),
        &[("positive", "good"), ("negative", "bad"), ("neutral", "fine")],
    );

    let err = reload_dictionaries(&SentimentConfig::default(), sources.path(), data.path())
        .unwrap_err();
    assert!(matches!(err, Error::Configuration(ref msg) if msg.contains("question")));
    let body = fs::read_to_string(folder.join("data.positive.json")).unwrap();
    assert_eq!(body, r#"["old"]"#);
    assert!(!folder.join("data.negative.json").exists());
}

#[test]
fn memory_and_filesystem_storage_agree() {
    let sources = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();
    write_sources(
        sources.path(),
        &[
            ("positive", "good"),
            ("negative", "bad"),
            ("neutral", "fine"),
            ("question", "why"),
        ],
    );
    let config = SentimentConfig::default();
    reload_dictionaries(&config, sources.path(), data.path()).unwrap();

    let fs_classifier = Classifier::new(config.clone(), &FsStorage::new(data.path()).unwrap()).unwrap();
    let memory = MemoryStorage::new()
        .with_list("sentiment/data.positive.json", ["good"])
        .with_list("sentiment/data.negative.json", ["bad"])
        .with_list("sentiment/data.neutral.json", ["fine"])
        .with_list("sentiment/data.question.json", ["why"]);
    let mem_classifier = Classifier::new(config, &memory).unwrap();

    for text in ["good", "bad fine", "why why good", ""] {
        assert_eq!(fs_classifier.classify(text), mem_classifier.classify(text), "{text:?}");
    }
}
