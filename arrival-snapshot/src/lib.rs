//! Live tram arrival snapshots.
//!
//! Polls the tram operator's timetable lookup for every configured stop,
//! extracts the upcoming arrivals from the returned pages and writes one
//! timestamped JSON snapshot per run.

pub mod board;
pub mod collect;
pub mod domain;
pub mod stops;
pub mod store;
