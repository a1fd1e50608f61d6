use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by backing-store operations.
///
/// A query with no matches is an empty result, never an error.
pub enum StoreError {
    /// The store could not be reached.
    #[error("backing store unavailable: {reason}")]
    Unavailable {
        /// Error message.
        reason: String,
    },

    /// A query was rejected or failed while executing.
    #[error("store query '{operation}' failed: {reason}")]
    QueryFailed {
        /// Operation name.
        operation: &'static str,
        /// Error message.
        reason: String,
    },

    /// The catalog file could not be read.
    #[error("failed to read catalog at {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid catalog JSON.
    #[error("failed to parse catalog at {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
