//! Configured stop groups.

use serde::Deserialize;

/// One physical stop within a group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String)")]
pub struct StopRef {
    /// Opaque stop identifier, used verbatim in upstream requests.
    pub stop_id: String,
    /// Display name.
    pub stop_name: String,
}

impl StopRef {
    pub fn new(stop_id: impl Into<String>, stop_name: impl Into<String>) -> Self {
        Self {
            stop_id: stop_id.into(),
            stop_name: stop_name.into(),
        }
    }
}

impl From<(String, String)> for StopRef {
    fn from((stop_id, stop_name): (String, String)) -> Self {
        Self { stop_id, stop_name }
    }
}

/// A named collection of stops sharing a group identifier.
///
/// Deserializes from the compact triple form used by the stop list file:
/// `["groupId", "groupName", [["stopId", "stopName"], ...]]`.
/// Stop order is significant and preserved.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String, Vec<StopRef>)")]
pub struct StopGroup {
    pub group_id: String,
    pub group_name: String,
    pub stops: Vec<StopRef>,
}

impl StopGroup {
    pub fn new(
        group_id: impl Into<String>,
        group_name: impl Into<String>,
        stops: Vec<StopRef>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            group_name: group_name.into(),
            stops,
        }
    }
}

impl From<(String, String, Vec<StopRef>)> for StopGroup {
    fn from((group_id, group_name, stops): (String, String, Vec<StopRef>)) -> Self {
        Self {
            group_id,
            group_name,
            stops,
        }
    }
}
