//! Stop list error types.

use std::path::PathBuf;

/// Errors that can occur when loading the stop list.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Stop list file could not be read
    #[error("failed to read stop list {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Stop list is not valid JSON in the expected shape
    #[error("invalid stop list: {0}")]
    Parse(#[from] serde_json::Error),

    /// A group has an empty identifier
    #[error("group {index} has an empty id")]
    EmptyGroupId { index: usize },

    /// A stop has an empty identifier
    #[error("stop {index} in group {group_id} has an empty id")]
    EmptyStopId { group_id: String, index: usize },
}
