//! Snapshot store error types.

use std::path::PathBuf;

/// Errors that can occur when persisting a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Date directory could not be created
    #[error("failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Snapshot could not be serialized
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Snapshot file could not be written
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
