//! Error types for sentilex.

use thiserror::Error;

/// Result type for sentilex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sentilex operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Required configuration or data is missing. Fatal at construction time.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Stored list content could not be decoded.
    #[error("Data format error: {0}")]
    DataFormat(String),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the core types.
    #[error(transparent)]
    Core(#[from] sentilex_core::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration(msg.into())
    }

    /// Create a data format error.
    pub fn data_format(msg: impl Into<String>) -> Self {
        Error::DataFormat(msg.into())
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
