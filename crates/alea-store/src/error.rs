//! Error types for preference storage.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while reading or writing preferences.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored data could not be parsed.
    #[error("malformed preference data: {0}")]
    Format(#[from] serde_json::Error),
}
