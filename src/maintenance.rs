//! Rebuilding the cached category dictionaries from source word lists.
//!
//! Source definitions are plain text, one word per line; blank lines and lines
//! starting with `#` are skipped. Each category `c` is read from
//! `{source_dir}/source.{code}.txt` and written, as the JSON array the
//! [`LexiconStore`](crate::LexiconStore) reads, to
//! `{data_root}/{config.resolve_path(c)}`. An [`FsStorage`](crate::FsStorage)
//! rooted at `data_root` with the same configuration loads the result.

use std::path::{Path, PathBuf};

use sentilex_core::Category;

use crate::config::{ListKind, SentimentConfig};
use crate::storage::encode_list;
use crate::{Error, Result};

/// Parse a plain-text source definition.
#[must_use]
pub fn parse_source(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Path of the source definition for `category`.
#[must_use]
pub fn source_path(config: &SentimentConfig, source_dir: &Path, category: Category) -> PathBuf {
    let code = config.code_for(ListKind::Category(category));
    source_dir.join(format!("source.{code}.txt"))
}

/// Delete the cached dictionaries, then regenerate each one from its source.
///
/// Every source definition is checked before anything is deleted, so a
/// missing source leaves the existing cache in place.
///
/// Returns the written files in category order.
///
/// # Errors
///
/// `Error::Configuration` if a source definition is missing; `Error::Io` on
/// any filesystem failure.
pub fn reload_dictionaries(
    config: &SentimentConfig,
    source_dir: impl AsRef<Path>,
    data_root: impl AsRef<Path>,
) -> Result<Vec<PathBuf>> {
    let source_dir = source_dir.as_ref();
    let data_root = data_root.as_ref();

    let plan: Vec<(Category, PathBuf, PathBuf)> = Category::ALL
        .into_iter()
        .map(|c| {
            let source = source_path(config, source_dir, c);
            let target = data_root.join(config.resolve_path(ListKind::Category(c)));
            (c, source, target)
        })
        .collect();

    if let Some((category, source, _)) = plan.iter().find(|(_, source, _)| !source.is_file()) {
        return Err(Error::configuration(format!(
            "source definition does not exist: {} - {category}",
            source.display()
        )));
    }

    for (category, _, target) in &plan {
        if target.exists() {
            std::fs::remove_file(target)?;
            log::debug!("[maintenance] removed cached {category} dictionary {}", target.display());
        }
    }

    let mut written = Vec::with_capacity(plan.len());
    for (category, source, target) in plan {
        let words = parse_source(&std::fs::read_to_string(&source)?);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, encode_list(&words))?;
        log::info!(
            "[maintenance] wrote {} {category} entries to {}",
            words.len(),
            target.display()
        );
        written.push(target);
    }
    Ok(written)
}
