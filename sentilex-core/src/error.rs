//! Error types for sentilex-core.

use thiserror::Error;

/// Result type for sentilex-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sentilex-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A label did not name one of the four sentiment categories.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl Error {
    /// Create an unknown category error.
    #[must_use]
    pub fn unknown_category(label: impl Into<String>) -> Self {
        Self::UnknownCategory(label.into())
    }
}
