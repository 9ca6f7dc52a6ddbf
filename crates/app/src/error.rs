//! Application error types.

use std::path::PathBuf;

use model::ModelError;
use thiserror::Error;

/// Errors raised while loading or saving the records file.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The file parsed but its contents violate a model rule.
    #[error("Invalid records: {0}")]
    Model(#[from] ModelError),

    /// The file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid JSON snapshot.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
