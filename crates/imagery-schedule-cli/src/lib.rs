//! Fetch imagery collection schedules and export them as JSON.
//!
//! Thin I/O around the `imagery-schedule` extraction library: download the
//! country directory and each country page, extract, and write one file
//! per country.

pub mod cli;
pub mod config;
pub mod fetch;
pub mod pipeline;
pub mod store;

pub use config::Config;
pub use fetch::{FetchError, Fetcher};
pub use pipeline::{Pipeline, RunSummary};
pub use store::{ScheduleStore, StoreError};
