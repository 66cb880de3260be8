//! Collected results, shaped the way they are persisted.

use serde::Serialize;

use super::{ArrivalRecord, StopGroup, StopRef};

/// One stop's successful fetch. `arrivals` is empty when the board had no
/// usable rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopResult {
    #[serde(rename = "id")]
    pub stop_id: String,
    #[serde(rename = "name")]
    pub stop_name: String,
    #[serde(rename = "data")]
    pub arrivals: Vec<ArrivalRecord>,
}

impl StopResult {
    pub fn new(stop: &StopRef, arrivals: Vec<ArrivalRecord>) -> Self {
        Self {
            stop_id: stop.stop_id.clone(),
            stop_name: stop.stop_name.clone(),
            arrivals,
        }
    }
}

/// One group's results, in configuration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupResult {
    #[serde(rename = "id")]
    pub group_id: String,
    #[serde(rename = "name")]
    pub group_name: String,
    #[serde(rename = "values")]
    pub stops: Vec<StopResult>,
}

impl GroupResult {
    /// Start an empty result for a configured group.
    pub fn new(group: &StopGroup) -> Self {
        Self {
            group_id: group.group_id.clone(),
            group_name: group.group_name.clone(),
            stops: Vec::new(),
        }
    }

    pub fn push(&mut self, stop: StopResult) {
        self.stops.push(stop);
    }

    /// Total arrival records across all stops in the group.
    pub fn arrival_count(&self) -> usize {
        self.stops.iter().map(|s| s.arrivals.len()).sum()
    }
}

/// The full output of one collection run.
///
/// Serializes as a bare JSON array of groups. The capture time is not
/// part of the document; it only names the file it is written to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    pub groups: Vec<GroupResult>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, group: GroupResult) {
        self.groups.push(group);
    }

    /// True when there are no groups at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }
}
