//! Timestamped snapshot files.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::info;

use crate::domain::Snapshot;

use super::error::StoreError;

/// Civil timezone used for file names unless configured otherwise.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Tokyo;

/// Configuration for the snapshot store.
#[derive(Debug, Clone)]
pub struct SnapshotStoreConfig {
    /// Root directory; snapshots go in per-day subdirectories.
    pub base_dir: PathBuf,
    /// Timezone the date and time in file names are expressed in.
    pub timezone: Tz,
}

impl SnapshotStoreConfig {
    /// Create a config rooted at `base_dir`, naming files in Japan time.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            timezone: DEFAULT_TIMEZONE,
        }
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }
}

impl Default for SnapshotStoreConfig {
    fn default() -> Self {
        Self::new("data")
    }
}

/// Writes snapshots to `<base>/<YYYY-MM-DD>/<HH-MM-SS>.json`.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    config: SnapshotStoreConfig,
}

impl SnapshotStore {
    pub fn new(config: SnapshotStoreConfig) -> Self {
        Self { config }
    }

    /// Path a snapshot captured at `at` is written to.
    pub fn snapshot_path(&self, at: DateTime<Utc>) -> PathBuf {
        let local = at.with_timezone(&self.config.timezone);
        self.config
            .base_dir
            .join(local.format("%Y-%m-%d").to_string())
            .join(format!("{}.json", local.format("%H-%M-%S")))
    }

    /// Write a snapshot as pretty-printed JSON.
    ///
    /// Creates the date directory if needed. A snapshot with no groups is
    /// not written and `Ok(None)` is returned; otherwise the written path.
    /// An existing file for the same second is overwritten.
    pub fn save(
        &self,
        snapshot: &Snapshot,
        at: DateTime<Utc>,
    ) -> Result<Option<PathBuf>, StoreError> {
        if snapshot.is_empty() {
            info!("no data fetched, skipping write");
            return Ok(None);
        }

        let path = self.snapshot_path(at);

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(snapshot)?;

        std::fs::write(&path, json).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), "snapshot saved");
        Ok(Some(path))
    }

    /// Root directory of the store.
    pub fn base_dir(&self) -> &Path {
        &self.config.base_dir
    }

    pub fn timezone(&self) -> Tz {
        self.config.timezone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArrivalRecord, GroupResult, StopGroup, StopRef, StopResult};
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn sample() -> Snapshot {
        let group = StopGroup::new("G1", "Line A", vec![StopRef::new("S1", "Stop One")]);
        let mut result = GroupResult::new(&group);
        result.push(StopResult::new(
            &group.stops[0],
            vec![ArrivalRecord::new("5", "Downtown行き", "10:15").unwrap()],
        ));
        let mut snapshot = Snapshot::new();
        snapshot.push(result);
        snapshot
    }

    #[test]
    fn config_defaults() {
        let config = SnapshotStoreConfig::default();
        assert_eq!(config.base_dir, PathBuf::from("data"));
        assert_eq!(config.timezone, chrono_tz::Asia::Tokyo);
    }

    #[test]
    fn store_exposes_config() {
        let store = SnapshotStore::new(
            SnapshotStoreConfig::new("/base").with_timezone(chrono_tz::Europe::London),
        );
        assert_eq!(store.base_dir(), Path::new("/base"));
        assert_eq!(store.timezone(), chrono_tz::Europe::London);
    }

    #[test]
    fn path_uses_japan_time() {
        let store = SnapshotStore::new(SnapshotStoreConfig::new("/base"));
        assert_eq!(
            store.snapshot_path(at(2024, 3, 15, 1, 2, 3)),
            PathBuf::from("/base/2024-03-15/10-02-03.json")
        );
    }

    #[test]
    fn path_rolls_date_at_local_midnight() {
        let store = SnapshotStore::new(SnapshotStoreConfig::new("/base"));
        // 15:30 UTC is 00:30 the next day in Tokyo.
        assert_eq!(
            store.snapshot_path(at(2024, 12, 31, 15, 30, 0)),
            PathBuf::from("/base/2025-01-01/00-30-00.json")
        );
    }

    #[test]
    fn path_honours_configured_timezone() {
        let store =
            SnapshotStore::new(SnapshotStoreConfig::new("out").with_timezone(chrono_tz::UTC));
        assert_eq!(
            store.snapshot_path(at(2024, 3, 15, 23, 59, 59)),
            PathBuf::from("out/2024-03-15/23-59-59.json")
        );
    }

    #[test]
    fn save_writes_pretty_json() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(SnapshotStoreConfig::new(dir.path()));

        let path = store.save(&sample(), at(2024, 3, 15, 1, 2, 3)).unwrap().unwrap();
        assert_eq!(path, dir.path().join("2024-03-15").join("10-02-03.json"));

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("[\n  {\n    \"id\": \"G1\""));

        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value[0]["values"][0]["data"][0]["destination"], "Downtown行き");
    }

    #[test]
    fn save_into_existing_date_dir() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(SnapshotStoreConfig::new(dir.path()));

        store.save(&sample(), at(2024, 3, 15, 1, 2, 3)).unwrap();
        store.save(&sample(), at(2024, 3, 15, 1, 7, 3)).unwrap();

        let count = std::fs::read_dir(dir.path().join("2024-03-15")).unwrap().count();
        assert_eq!(count, 2);
    }

    #[test]
    fn empty_snapshot_is_not_written() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(SnapshotStoreConfig::new(dir.path()));

        let saved = store.save(&Snapshot::new(), at(2024, 3, 15, 1, 2, 3)).unwrap();
        assert!(saved.is_none());
        assert!(!dir.path().join("2024-03-15").exists());
    }

    #[test]
    fn unwritable_base_is_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let store = SnapshotStore::new(SnapshotStoreConfig::new(&blocker));
        let err = store.save(&sample(), at(2024, 3, 15, 1, 2, 3)).unwrap_err();
        assert!(matches!(err, StoreError::CreateDir { .. }));
    }
}
