//! Read-only storage the lexicon store loads word lists from.
//!
//! A [`Storage`] is a key -> bytes lookup with an existence check. Keys are
//! the paths produced by [`SentimentConfig::resolve_path`](crate::SentimentConfig::resolve_path).

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use crate::{Error, Result};

/// Key/content lookup used to load dictionaries.
pub trait Storage: Send + Sync {
    /// Whether `path` exists.
    fn exists(&self, path: &str) -> bool;

    /// Full content of `path`.
    fn read(&self, path: &str) -> Result<Vec<u8>>;
}

/// Storage backed by a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    /// Storage rooted at `root`. Fails if the directory does not exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::configuration(format!(
                "could not find the directory - {}",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    /// Root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    // Keys are relative; anything escaping the root resolves to nothing.
    fn locate(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        (!escapes).then(|| self.root.join(relative))
    }
}

impl Storage for FsStorage {
    fn exists(&self, path: &str) -> bool {
        self.locate(path).is_some_and(|p| p.is_file())
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        let full = self
            .locate(path)
            .ok_or_else(|| Error::invalid_input(format!("path escapes storage root: {path}")))?;
        Ok(std::fs::read(full)?)
    }
}

/// In-memory storage.
///
/// ```rust
/// use sentilex::{MemoryStorage, Storage};
///
/// let storage = MemoryStorage::new().with_list("lists/positive.json", ["good", "great"]);
/// assert!(storage.exists("lists/positive.json"));
/// assert_eq!(storage.read("lists/positive.json").unwrap(), br#"["good","great"]"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStorage {
    /// Empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw bytes under `path`.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.entries.insert(path.into(), content.into());
    }

    /// Store a word list under `path`, serialized the way the lexicon store expects.
    pub fn insert_list<I, S>(&mut self, path: impl Into<String>, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        self.insert(path, encode_list(&words));
    }

    /// Builder form of [`MemoryStorage::insert_list`].
    #[must_use]
    pub fn with_list<I, S>(mut self, path: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert_list(path, words);
        self
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn exists(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        self.entries
            .get(path)
            .cloned()
            .ok_or_else(|| Error::invalid_input(format!("no such entry: {path}")))
    }
}

/// Serialize a word list (a JSON array of strings).
#[must_use]
pub fn encode_list(words: &[String]) -> Vec<u8> {
    // Serializing a slice of strings cannot fail.
    serde_json::to_vec(words).unwrap_or_else(|_| b"[]".to_vec())
}

/// Deserialize a word list.
pub fn decode_list(content: &[u8]) -> Result<Vec<String>> {
    let text = std::str::from_utf8(content)
        .map_err(|e| Error::data_format(format!("list is not valid UTF-8: {e}")))?;
    serde_json::from_str(text)
        .map_err(|e| Error::data_format(format!("expected a JSON array of strings: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_rejects_non_array() {
        let err = decode_list(br#"{"good": 1}"#).unwrap_err();
        assert!(matches!(err, Error::DataFormat(_)));
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        let err = decode_list(&[0x5b, 0xff, 0x5d]).unwrap_err();
        assert!(matches!(err, Error::DataFormat(_)));
    }

    #[test]
    fn encode_then_decode_preserves_order() {
        let words = vec!["b".to_string(), "a".to_string()];
        assert_eq!(decode_list(&encode_list(&words)).unwrap(), words);
    }

    #[test]
    fn memory_storage_reports_missing_entries() {
        let storage = MemoryStorage::new();
        assert!(!storage.exists("nope"));
        assert!(storage.read("nope").is_err());
    }

    #[test]
    fn fs_storage_requires_existing_root() {
        let err = FsStorage::new("/definitely/not/a/real/dir").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn fs_storage_reads_relative_keys() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("lists")).unwrap();
        std::fs::write(dir.path().join("lists/x.json"), b"[\"ok\"]").unwrap();

        let storage = FsStorage::new(dir.path()).unwrap();
        assert!(storage.exists("lists/x.json"));
        assert!(!storage.exists("lists"));
        assert_eq!(storage.read("lists/x.json").unwrap(), b"[\"ok\"]");
    }

    #[test]
    fn fs_storage_refuses_to_escape_root() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(dir.path()).unwrap();
        assert!(!storage.exists("../etc/passwd"));
        assert!(!storage.exists("/etc/passwd"));
        assert!(matches!(
            storage.read("../etc/passwd").unwrap_err(),
            Error::InvalidInput(_)
        ));
    }
}
