//! Extract records from the table layout.
//!
//! Each `<table>` lists one region per row: region in the first cell,
//! date range in the last, and on some pages an equipment column in
//! between. Tables without that column are introduced by an `<h3>` whose
//! text names the equipment.

use crate::classifier;
use crate::dom::{DomNode, Query};
use crate::error::{require, ExtractError, Field, Location};
use crate::types::{Extraction, ScheduleRecord};

/// Heading tag that precedes each table.
pub const HEADING_TAG: &str = "h3";

/// Extract every data row of every table, in order.
pub fn extract_tables<N: DomNode>(tables: &[N]) -> Extraction {
    let mut extraction = Extraction::default();

    for (t, table) in tables.iter().enumerate() {
        let heading = table_heading(table);
        for (r, row) in data_rows(table).iter().enumerate() {
            let location = Location::Row { table: t, row: r };
            extraction.push(extract_row(location, row, heading.as_deref()));
        }
    }

    extraction
}

/// Text of the nearest `<h3>` sibling before the table.
fn table_heading<N: DomNode>(table: &N) -> Option<String> {
    table
        .previous_siblings()
        .into_iter()
        .find(|node| node.name() == HEADING_TAG)
        .map(|h| h.text().trim().to_string())
}

/// Body rows, header rows excluded.
fn data_rows<N: DomNode>(table: &N) -> Vec<N> {
    let body = table
        .find(&Query::Tag("tbody"))
        .unwrap_or_else(|| table.clone());

    body.find_all(&Query::Tag("tr"))
        .into_iter()
        .filter(|row| !is_header_row(row))
        .collect()
}

/// A row made only of `<th>` cells.
fn is_header_row<N: DomNode>(row: &N) -> bool {
    let cells = row.children();
    !cells.is_empty() && cells.iter().all(|c| c.name() == "th")
}

fn extract_row<N: DomNode>(
    location: Location,
    row: &N,
    heading: Option<&str>,
) -> Result<ScheduleRecord, ExtractError> {
    let cells = row.children();
    let (first, last) = match cells.as_slice() {
        [first, .., last] => (first, last),
        _ => {
            return Err(ExtractError::MalformedRow {
                location,
                cells: cells.len(),
            })
        }
    };

    let region = require(location, Field::Region, cell_text(first))?;
    let period = require(location, Field::Period, cell_text(last))?;

    let kind = if cells.len() > 2 {
        Some(cell_text(&cells[1])).filter(|t| !t.is_empty())
    } else {
        let heading = heading.ok_or(ExtractError::MissingElement {
            location,
            element: "h3 heading before table",
        })?;
        classifier::detect_equipment(heading).map(|e| e.as_str().to_string())
    };

    Ok(ScheduleRecord::new(region, period).with_kind(kind))
}

fn cell_text<N: DomNode>(cell: &N) -> String {
    cell.text().trim().to_string()
}
