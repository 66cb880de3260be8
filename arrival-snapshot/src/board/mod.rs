//! Arrival board fetching and extraction.
//!
//! The tram operator's lookup endpoint returns an HTML page per stop.
//! [`BoardClient`] fetches it, [`Extractor`] turns its results table into
//! [`ArrivalRecord`](crate::domain::ArrivalRecord)s. [`MockBoardClient`]
//! serves saved pages instead of calling the endpoint.

mod client;
mod error;
mod extract;
mod mock;
mod source;

pub use client::{BoardClient, BoardConfig, form_body};
pub use error::FetchError;
pub use extract::{Extractor, RESULTS_TABLE_ID, RowField, RowNode, extract, parse_row};
pub use mock::MockBoardClient;
pub use source::{BoardSource, fetch_markup};
