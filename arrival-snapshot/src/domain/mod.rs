//! Domain types for arrival snapshots.
//!
//! Configuration types ([`StopGroup`], [`StopRef`]) come in; result types
//! ([`Snapshot`], [`GroupResult`], [`StopResult`], [`ArrivalRecord`]) go
//! out. Results keep configuration order throughout.

mod arrival;
mod snapshot;
mod stop;

pub use arrival::{ArrivalRecord, BOUND_FOR, clean_destination, truncate_at_marker};
pub use snapshot::{GroupResult, Snapshot, StopResult};
pub use stop::{StopGroup, StopRef};
