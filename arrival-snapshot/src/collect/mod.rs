//! Collection of one snapshot across all configured stops.

mod run;


pub use run::{Collector, RunStats};
