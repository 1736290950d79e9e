//! Extraction error taxonomy.
//!
//! None of these abort a document. Each one describes a single row or
//! section that was left out of the output.

use std::fmt;
use thiserror::Error;

/// Where in the document an item was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// A data row, both indices zero-based.
    Row { table: usize, row: usize },
    /// A period section, zero-based.
    Section { section: usize },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Row { table, row } => write!(f, "table {table} row {row}"),
            Location::Section { section } => write!(f, "section {section}"),
        }
    }
}

/// Record field that must not be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Region,
    Period,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Region => f.write_str("region"),
            Field::Period => f.write_str("period"),
        }
    }
}

/// Why an item was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// A data row with fewer than two cells.
    #[error("{location}: malformed row with {cells} cell(s), need at least 2")]
    MalformedRow { location: Location, cells: usize },

    /// An element the layout relies on is absent.
    #[error("{location}: missing {element}")]
    MissingElement {
        location: Location,
        element: &'static str,
    },

    /// A required field was blank after trimming.
    #[error("{location}: empty {field}")]
    EmptyField { location: Location, field: Field },
}

impl ExtractError {
    pub fn location(&self) -> Location {
        match self {
            ExtractError::MalformedRow { location, .. }
            | ExtractError::MissingElement { location, .. }
            | ExtractError::EmptyField { location, .. } => *location,
        }
    }
}

/// Reject blank required fields so no partial record is ever emitted.
pub(crate) fn require(
    location: Location,
    field: Field,
    value: String,
) -> Result<String, ExtractError> {
    if value.is_empty() {
        Err(ExtractError::EmptyField { location, field })
    } else {
        Ok(value)
    }
}
