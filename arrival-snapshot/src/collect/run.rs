//! Sequential collection run.

use tracing::{debug, info, warn};

use crate::board::{BoardSource, Extractor, fetch_markup};
use crate::domain::{GroupResult, Snapshot, StopGroup, StopResult};

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Stops whose board was fetched (with or without rows).
    pub stops_fetched: usize,
    /// Stops whose fetch failed and were left out.
    pub stops_failed: usize,
    /// Arrival records kept across all stops.
    pub arrivals: usize,
}

/// Drives fetch and extraction over the configured groups.
///
/// Stops are fetched one at a time, in configuration order. A stop whose
/// fetch fails is left out of its group entirely; a stop whose page has
/// no usable rows is kept with no arrivals.
pub struct Collector<'a, S: BoardSource> {
    source: &'a S,
    extractor: Extractor,
}

impl<'a, S: BoardSource> Collector<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            extractor: Extractor::new(),
        }
    }

    /// Collect a snapshot for `groups`.
    pub async fn run(&self, groups: &[StopGroup]) -> Snapshot {
        self.run_with_stats(groups).await.0
    }

    /// Collect a snapshot for `groups`, also returning run counters.
    pub async fn run_with_stats(&self, groups: &[StopGroup]) -> (Snapshot, RunStats) {
        let mut snapshot = Snapshot::new();
        let mut stats = RunStats::default();

        for group in groups {
            let mut result = GroupResult::new(group);

            for stop in &group.stops {
                let markup = fetch_markup(self.source, &stop.stop_id, &group.group_id, |err| {
                    warn!(
                        group_id = %group.group_id,
                        stop_id = %stop.stop_id,
                        error = %err,
                        "failed to fetch board"
                    );
                })
                .await;

                let Some(markup) = markup else {
                    stats.stops_failed += 1;
                    continue;
                };

                let arrivals = self.extractor.extract(&markup);
                debug!(
                    group_id = %group.group_id,
                    stop_id = %stop.stop_id,
                    arrivals = arrivals.len(),
                    "parsed board"
                );

                stats.stops_fetched += 1;
                stats.arrivals += arrivals.len();
                result.push(StopResult::new(stop, arrivals));
            }

            info!(
                group_id = %group.group_id,
                stops = result.stops.len(),
                configured = group.stops.len(),
                arrivals = result.arrival_count(),
                "collected group"
            );
            snapshot.push(result);
        }

        (snapshot, stats)
    }
}
