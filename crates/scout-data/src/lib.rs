//! Data layer for Job Scout.
//!
//! Responsible for fetching listings from the remote API, keyword filtering,
//! category aggregation for the chart, and saving/loading job tables as CSV
//! or spreadsheet files.

pub mod aggregate;
pub mod fetcher;
pub mod filter;
pub mod persister;

pub use scout_core as core;
