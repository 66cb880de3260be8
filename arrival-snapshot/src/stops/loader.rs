//! Stop list loading.
//!
//! The stop list is a JSON array of groups in the compact triple form:
//!
//! ```json
//! [
//!   ["2", "Line 2", [["0123", "Hiroshima Station"], ["0456", "Kamiyacho"]]]
//! ]
//! ```
//!
//! It is read once per run and passed explicitly to the collector.

use std::path::Path;

use tracing::debug;

use crate::domain::StopGroup;

use super::error::ConfigError;

/// Load and validate the stop list from a file.
pub fn load_groups(path: impl AsRef<Path>) -> Result<Vec<StopGroup>, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let groups = parse_groups(&contents)?;
    debug!(
        path = %path.display(),
        groups = groups.len(),
        stops = groups.iter().map(|g| g.stops.len()).sum::<usize>(),
        "loaded stop list"
    );
    Ok(groups)
}

/// Parse and validate a stop list from JSON text.
///
/// Identifiers are used verbatim in requests, so only emptiness is checked.
pub fn parse_groups(json: &str) -> Result<Vec<StopGroup>, ConfigError> {
    let groups: Vec<StopGroup> = serde_json::from_str(json)?;

    for (index, group) in groups.iter().enumerate() {
        if group.group_id.is_empty() {
            return Err(ConfigError::EmptyGroupId { index });
        }
        if let Some(index) = group.stops.iter().position(|s| s.stop_id.is_empty()) {
            return Err(ConfigError::EmptyStopId {
                group_id: group.group_id.clone(),
                index,
            });
        }
    }

    Ok(groups)
}
