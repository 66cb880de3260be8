//! Snapshot persistence.
//!
//! One JSON file per run, named by the capture time in a fixed civil
//! timezone.

mod error;
mod writer;

pub use error::StoreError;
pub use writer::{DEFAULT_TIMEZONE, SnapshotStore, SnapshotStoreConfig};
