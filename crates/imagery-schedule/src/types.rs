//! Output record types.

use crate::error::ExtractError;
use serde::{Deserialize, Serialize};

/// One scheduled collection: where, when, and optionally with what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    /// Area name as printed on the page.
    pub region: String,
    /// Free-text date range, kept verbatim.
    pub period: String,
    /// Equipment label. Absent when it could not be determined.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Sub-areas of `region`, detailed layout only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdivisions: Option<Vec<String>>,
}

impl ScheduleRecord {
    /// Create a record with no type and no subdivisions.
    pub fn new(region: impl Into<String>, period: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            period: period.into(),
            kind: None,
            subdivisions: None,
        }
    }

    pub fn with_kind(mut self, kind: Option<String>) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_subdivisions(mut self, subdivisions: Vec<String>) -> Self {
        self.subdivisions = Some(subdivisions);
        self
    }
}

/// Result of extracting one document.
///
/// Items that could not become valid records are reported in `skipped`
/// instead of aborting the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Records in document traversal order.
    pub records: Vec<ScheduleRecord>,
    /// Rows or sections that were dropped, in traversal order.
    pub skipped: Vec<ExtractError>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.skipped.is_empty()
    }

    /// Record the outcome of one row or collection.
    pub fn push(&mut self, outcome: Result<ScheduleRecord, ExtractError>) {
        match outcome {
            Ok(record) => self.records.push(record),
            Err(e) => {
                tracing::debug!("skipped {}", e);
                self.skipped.push(e);
            }
        }
    }
}

/// Serialize records as the persisted JSON array.
///
/// Two-space indentation, non-ASCII characters left unescaped.
pub fn to_json(records: &[ScheduleRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Location;

    #[test]
    fn test_absent_fields_are_omitted() {
        let record = ScheduleRecord::new("Region A", "Jan 1 – Feb 1");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"region": "Region A", "period": "Jan 1 – Feb 1"})
        );
    }

    #[test]
    fn test_type_field_name() {
        let record = ScheduleRecord::new("A", "B")
            .with_kind(Some("backpack".to_string()))
            .with_subdivisions(vec!["East".to_string()]);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "backpack");
        assert_eq!(json["subdivisions"], serde_json::json!(["East"]));
    }

    #[test]
    fn test_to_json_layout() {
        let mut extraction = Extraction::default();
        extraction.push(Ok(ScheduleRecord::new("Zürich", "März")));
        let json = to_json(&extraction.records).unwrap();
        assert_eq!(
            json,
            "[\n  {\n    \"region\": \"Zürich\",\n    \"period\": \"März\"\n  }\n]"
        );
    }

    #[test]
    fn test_push_routes_errors() {
        let mut extraction = Extraction::default();
        extraction.push(Err(ExtractError::MalformedRow {
            location: Location::Row { table: 0, row: 3 },
            cells: 1,
        }));
        extraction.push(Ok(ScheduleRecord::new("A", "B")));
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.skipped.len(), 1);
        assert!(!extraction.is_empty());
        assert!(Extraction::default().is_empty());
    }

    #[test]
    fn test_round_trip_from_json() {
        let json = r#"[{"region":"A","period":"B","type":"vehicle","subdivisions":["X","Y"]}]"#;
        let records: Vec<ScheduleRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].kind.as_deref(), Some("vehicle"));
        assert_eq!(records[0].subdivisions.as_ref().unwrap().len(), 2);
    }
}
