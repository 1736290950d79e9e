//! Imagery collection schedule extraction.
//!
//! Turns a country's schedule page into an ordered list of
//! [`ScheduleRecord`]s. Pages come in two layouts: one built from tables
//! and one built from nested period sections. [`Layout::detect`] picks the
//! layout once and [`Layout::extract`] runs the matching extractor.
//! Equipment labels are resolved from multilingual headings by
//! [`classifier::classify`].
//!
//! Everything here is synchronous and pure. Fetching pages and writing
//! results live in the CLI crate.

pub mod classifier;
pub mod countries;
pub mod detailed;
pub mod dom;
pub mod error;
pub mod layout;
pub mod tabular;
pub mod types;

pub use classifier::{classify, Equipment};
pub use countries::{countries_from_html, is_valid_identifier, list_countries};
pub use dom::{DomNode, HtmlDocument, HtmlNode, Query};
pub use error::{ExtractError, Field, Location};
pub use layout::{extract_document, Layout, LayoutKind};
pub use types::{to_json, Extraction, ScheduleRecord};
