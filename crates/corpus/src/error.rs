//! Error types for the corpus crate.

use thiserror::Error;

/// Result type alias for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;

/// Errors that can occur while loading a candidate corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Corpus file does not exist
    #[error("Corpus file not found: {0}")]
    NotFound(String),

    /// Underlying read failure
    #[error("Failed to read corpus: {0}")]
    Io(#[from] std::io::Error),
}
