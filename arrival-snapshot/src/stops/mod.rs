//! Configured stop list.
//!
//! Loads the groups of stops to poll. The list is static for a run.

mod error;
mod loader;

pub use error::ConfigError;
pub use loader::{load_groups, parse_groups};
