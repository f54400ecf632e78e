//! Lexicon store: category dictionaries plus the ignore and prefix lists.
//!
//! # Loading
//!
//! [`LexiconStore::load`] reads the four category dictionaries first, then
//! the auxiliary lists. The two groups fail differently:
//!
//! | List | Missing in storage | Malformed content |
//! |------|--------------------|-------------------|
//! | positive / negative / neutral / question | `Error::Configuration` | `Error::DataFormat` |
//! | ignore / prefix | empty list (logged) | `Error::DataFormat` |
//!
//! Every entry is unescaped, trimmed and lower-cased; entries that end up
//! empty are dropped and duplicates are kept once. After loading the store is
//! immutable, so one store can back many concurrent classifications.

use std::collections::HashSet;

use serde::Serialize;
use sentilex_core::Category;

use crate::config::{ListKind, SentimentConfig};
use crate::storage::{decode_list, Storage};
use crate::{Error, Result};

/// Exact-match word lookup.
pub trait Lexicon: Send + Sync {
    /// Whether `token` is an entry.
    fn contains(&self, token: &str) -> bool;

    /// Identifier of where the entries came from (for logs).
    fn source(&self) -> &str;

    /// Number of entries.
    fn len(&self) -> usize;

    /// Check if the lexicon is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered, de-duplicated word list.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
    index: HashSet<String>,
    source: String,
}

impl WordList {
    /// Empty list tagged with a source identifier.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            words: Vec::new(),
            index: HashSet::new(),
            source: source.into(),
        }
    }

    /// Clean and append a raw entry. Returns `true` if it was new.
    pub fn insert(&mut self, raw: &str) -> bool {
        clean_entry(raw).is_some_and(|word| self.insert_cleaned(word))
    }

    /// Append an entry already passed through [`clean_entry`]; only
    /// de-duplicates. Returns `true` if it was new.
    pub fn insert_cleaned(&mut self, word: String) -> bool {
        if word.is_empty() || self.index.contains(&word) {
            return false;
        }
        self.index.insert(word.clone());
        self.words.push(word);
        true
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl<S: AsRef<str>> Extend<S> for WordList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for raw in iter {
            self.insert(raw.as_ref());
        }
    }
}

impl Lexicon for WordList {
    fn contains(&self, token: &str) -> bool {
        self.index.contains(token)
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

/// Load counters for one category dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    /// Raw entries read, duplicates included.
    pub read: usize,
    /// Distinct entries kept.
    pub unique: usize,
}

/// Diagnostic counters. Not used in scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LexiconStats {
    categories: [CategoryStats; 4],
    /// Raw entries read across all category dictionaries.
    pub total_read: usize,
    /// Size of the ignore list.
    pub ignore_len: usize,
    /// Size of the negation prefix list.
    pub prefix_len: usize,
}

impl LexiconStats {
    /// Counters for one category.
    #[must_use]
    pub fn category(&self, category: Category) -> CategoryStats {
        self.categories[category.index()]
    }
}

/// The four category dictionaries plus the ignore and negation prefix lists.
///
/// ```rust
/// use sentilex::{Lexicon, LexiconStore};
/// use sentilex_core::Category;
///
/// let store = LexiconStore::new()
///     .with_words(Category::Positive, ["Good ", "great", "good"])
///     .with_prefixes(["not"]);
///
/// assert!(store.contains(Category::Positive, "good"));
/// assert_eq!(store.list(Category::Positive).len(), 2);
/// assert!(store.is_prefix("not"));
/// ```
#[derive(Debug, Clone)]
pub struct LexiconStore {
    categories: [WordList; 4],
    ignore: WordList,
    prefixes: WordList,
    stats: LexiconStats,
}

impl Default for LexiconStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconStore {
    /// Store with every list empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            categories: Category::ALL.map(|c| WordList::new(c.as_label())),
            ignore: WordList::new("ignore"),
            prefixes: WordList::new("prefix"),
            stats: LexiconStats::default(),
        }
    }

    /// Load all lists named by `config` from `storage`.
    ///
    /// # Errors
    ///
    /// `Error::Configuration` if a category dictionary is missing;
    /// `Error::DataFormat` if any list cannot be decoded.
    pub fn load(config: &SentimentConfig, storage: &dyn Storage) -> Result<Self> {
        let mut store = Self::new();
        for category in Category::ALL {
            store.load_category(config, storage, category)?;
        }
        let ignore = Self::load_auxiliary(config, storage, ListKind::Ignore)?;
        let prefixes = Self::load_auxiliary(config, storage, ListKind::Prefix)?;
        for word in ignore {
            store.ignore.insert_cleaned(word);
        }
        for word in prefixes {
            store.prefixes.insert_cleaned(word);
        }
        store.stats.ignore_len = store.ignore.len();
        store.stats.prefix_len = store.prefixes.len();

        log::info!(
            "[LexiconStore] loaded {} positive, {} negative, {} neutral, {} question, {} ignore, {} prefix entries",
            store.list(Category::Positive).len(),
            store.list(Category::Negative).len(),
            store.list(Category::Neutral).len(),
            store.list(Category::Question).len(),
            store.ignore.len(),
            store.prefixes.len(),
        );
        Ok(store)
    }

    /// Append one category dictionary from storage. Returns the number of new entries.
    pub fn load_category(
        &mut self,
        config: &SentimentConfig,
        storage: &dyn Storage,
        category: Category,
    ) -> Result<usize> {
        let path = config.resolve_path(ListKind::Category(category));
        if !storage.exists(&path) {
            return Err(Error::configuration(format!(
                "Data File does not exist: {path} - {category}"
            )));
        }
        let entries = decode_list(&storage.read(&path)?)?;
        let added = self.add_words(category, &entries);
        log::debug!(
            "[LexiconStore] {category}: read {} entries from {path}, {added} new",
            entries.len()
        );
        Ok(added)
    }

    /// Read an auxiliary list (`Ignore` or `Prefix`) in stored order.
    ///
    /// A missing list is not an error: it is logged and treated as empty.
    pub fn load_auxiliary(
        config: &SentimentConfig,
        storage: &dyn Storage,
        kind: ListKind,
    ) -> Result<Vec<String>> {
        if !kind.is_auxiliary() {
            return Err(Error::invalid_input(format!(
                "{kind} is a category dictionary, not an auxiliary list"
            )));
        }
        let path = config.resolve_path(kind);
        if !storage.exists(&path) {
            log::warn!("[LexiconStore] {kind} list not found at {path}; using an empty list");
            return Ok(Vec::new());
        }
        let entries = decode_list(&storage.read(&path)?)?;
        log::debug!("[LexiconStore] {kind}: read {} entries from {path}", entries.len());
        Ok(entries.iter().filter_map(|raw| clean_entry(raw)).collect())
    }

    fn add_words<S: AsRef<str>>(&mut self, category: Category, entries: &[S]) -> usize {
        let list = &mut self.categories[category.index()];
        let mut added = 0;
        for raw in entries {
            if list.insert(raw.as_ref()) {
                added += 1;
            }
        }
        let stats = &mut self.stats.categories[category.index()];
        stats.read += entries.len();
        stats.unique = list.len();
        self.stats.total_read += entries.len();
        added
    }

    /// Add words to a category dictionary.
    #[must_use]
    pub fn with_words<I, S>(mut self, category: Category, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<S> = words.into_iter().collect();
        self.add_words(category, &words);
        self
    }

    /// Add tokens to the ignore list.
    #[must_use]
    pub fn with_ignored<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ignore.extend(tokens);
        self.stats.ignore_len = self.ignore.len();
        self
    }

    /// Add negation prefixes, keeping their order.
    #[must_use]
    pub fn with_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.prefixes.extend(prefixes);
        self.stats.prefix_len = self.prefixes.len();
        self
    }

    /// Dictionary of one category.
    #[must_use]
    pub fn list(&self, category: Category) -> &WordList {
        &self.categories[category.index()]
    }

    /// Whether `token` is in the dictionary of `category`.
    #[must_use]
    #[inline]
    pub fn contains(&self, category: Category, token: &str) -> bool {
        self.categories[category.index()].contains(token)
    }

    /// Whether `token` is on the ignore list.
    #[must_use]
    #[inline]
    pub fn is_ignored(&self, token: &str) -> bool {
        self.ignore.contains(token)
    }

    /// Whether `token` is a negation prefix.
    #[must_use]
    pub fn is_prefix(&self, token: &str) -> bool {
        self.prefixes.contains(token)
    }

    /// Negation prefixes in list order.
    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        self.prefixes.words()
    }

    /// Ignored tokens in list order.
    #[must_use]
    pub fn ignored(&self) -> &[String] {
        self.ignore.words()
    }

    /// Load counters.
    #[must_use]
    pub fn stats(&self) -> &LexiconStats {
        &self.stats
    }
}

/// Normalize a raw list entry: unescape, trim, lower-case. `None` if nothing is left.
#[must_use]
pub fn clean_entry(raw: &str) -> Option<String> {
    let word = unescape(raw).trim().to_lowercase();
    (!word.is_empty()).then_some(word)
}

/// Undo C-style backslash escapes (`\n`, `\t`, `\\`, `\xHH`, octal, ...).
/// An unknown escape yields the escaped character; a trailing backslash is dropped.
fn unescape(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(next) = chars.next() else { break };
        match next {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'a' => out.push('\x07'),
            'v' => out.push('\x0b'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0c'),
            'x' => {
                let mut value = 0u32;
                let mut digits = 0;
                while digits < 2 {
                    match chars.peek().and_then(|d| d.to_digit(16)) {
                        Some(d) => {
                            value = value * 16 + d;
                            chars.next();
                            digits += 1;
                        }
                        None => break,
                    }
                }
                if digits == 0 {
                    out.push('x');
                } else {
                    out.extend(char::from_u32(value));
                }
            }
            '0'..='7' => {
                let mut value = next.to_digit(8).unwrap_or(0);
                let mut digits = 1;
                while digits < 3 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(d) => {
                            value = value * 8 + d;
                            chars.next();
                            digits += 1;
                        }
                        None => break,
                    }
                }
                out.extend(char::from_u32(value & 0xff));
            }
            other => out.push(other),
        }
    }
    out
}
