//! Extract records from the nested-list layout.
//!
//! Pages without tables group the schedule into period sections
//! (`.dl-period`). A section names its region (`.driving-dates`) and its
//! period (`<h5>`), then holds one or more collections (`.dl-level-2`),
//! each listing subdivision names (`span.dl-level-name`).

use crate::classifier;
use crate::dom::{DomNode, Query};
use crate::error::{require, ExtractError, Field, Location};
use crate::types::{Extraction, ScheduleRecord};

pub const SECTION_CLASS: &str = "dl-period";
pub const REGION_CLASS: &str = "driving-dates";
pub const COLLECTION_CLASS: &str = "dl-level-2";
pub const SUBDIVISION_CLASS: &str = "dl-level-name";
pub const PERIOD_TAG: &str = "h5";

/// Region and period shared by every collection of one section.
struct SectionHeader {
    region: String,
    period: String,
}

/// Extract one record per (section, collection) pair, in document order.
pub fn extract_sections<N: DomNode>(root: &N) -> Extraction {
    let mut extraction = Extraction::default();

    for (s, section) in root.find_all(&Query::Class(SECTION_CLASS)).iter().enumerate() {
        let collections = section.find_all(&Query::Class(COLLECTION_CLASS));
        if collections.is_empty() {
            tracing::debug!("section {s} has no collections");
            continue;
        }

        let header = match section_header(s, section) {
            Ok(header) => header,
            Err(e) => {
                extraction.push(Err(e));
                continue;
            }
        };

        for collection in &collections {
            extraction.push(Ok(collection_record(&header, collection)));
        }
    }

    extraction
}

fn section_header<N: DomNode>(s: usize, section: &N) -> Result<SectionHeader, ExtractError> {
    let location = Location::Section { section: s };

    let region = section
        .find(&Query::Class(REGION_CLASS))
        .ok_or(ExtractError::MissingElement {
            location,
            element: "driving-dates label",
        })?;
    let period = section
        .find(&Query::Tag(PERIOD_TAG))
        .ok_or(ExtractError::MissingElement {
            location,
            element: "h5 heading",
        })?;

    Ok(SectionHeader {
        region: require(location, Field::Region, region.text().trim().to_string())?,
        period: require(location, Field::Period, period.text().trim().to_string())?,
    })
}

fn collection_record<N: DomNode>(header: &SectionHeader, collection: &N) -> ScheduleRecord {
    let subdivisions = collection
        .find_all(&Query::TagClass("span", SUBDIVISION_CLASS))
        .iter()
        .filter_map(|tag| subdivision_name(&tag.text()))
        .collect();

    ScheduleRecord::new(header.region.clone(), header.period.clone())
        .with_kind(classifier::resolve_kind(&header.period))
        .with_subdivisions(subdivisions)
}

/// Trim a subdivision name and drop one trailing list comma.
/// Returns `None` when nothing is left.
fn subdivision_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let name = trimmed.strip_suffix(',').unwrap_or(trimmed).trim_end();
    (!name.is_empty()).then(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HtmlDocument;

    fn run(html: &str) -> Extraction {
        let doc = HtmlDocument::parse(html);
        extract_sections(&doc.root())
    }

    fn section(region: &str, heading: &str, collections: &[&[&str]]) -> String {
        let body: String = collections
            .iter()
            .map(|names| {
                let spans: String = names
                    .iter()
                    .map(|n| format!(r#"<span class="dl-level-name">{n}</span> "#))
                    .collect();
                format!(r#"<div class="dl-level-2">{spans}</div>"#)
            })
            .collect();
        format!(
            r#"<div class="dl-period">
                 <h5>{heading}</h5>
                 <p class="driving-dates">{region}</p>
                 {body}
               </div>"#
        )
    }

    #[test]
    fn test_subdivisions_strip_trailing_comma() {
        let extraction = run(&section("North District", "Vehicle Collection", &[&["East,", "West"]]));
        assert!(extraction.skipped.is_empty());
        assert_eq!(
            extraction.records,
            vec![ScheduleRecord::new("North District", "Vehicle Collection")
                .with_kind(Some("vehicle".to_string()))
                .with_subdivisions(vec!["East".to_string(), "West".to_string()])]
        );
    }

    #[test]
    fn test_unclassified_heading_has_no_type() {
        let extraction = run(&section("Region", "May 3 – June 9, 2024", &[&["A"]]));
        let record = &extraction.records[0];
        assert_eq!(record.period, "May 3 – June 9, 2024");
        assert_eq!(record.kind, None);
    }

    #[test]
    fn test_blank_subdivisions_are_dropped() {
        let extraction = run(&section("R", "Backpack", &[&["   ", ",", "Alpha ,", ""]]));
        assert_eq!(
            extraction.records[0].subdivisions.as_deref(),
            Some(&["Alpha".to_string()][..])
        );
    }

    #[test]
    fn test_one_record_per_collection() {
        let extraction = run(&section("R", "Rucksack", &[&["A", "B"], &["C"]]));
        assert_eq!(extraction.records.len(), 2);
        assert_eq!(extraction.records[0].subdivisions.as_ref().unwrap(), &["A", "B"]);
        assert_eq!(extraction.records[1].subdivisions.as_ref().unwrap(), &["C"]);
        assert!(extraction.records.iter().all(|r| r.period == "Rucksack"));
        assert!(extraction.records.iter().all(|r| r.kind.as_deref() == Some("backpack")));
    }

    #[test]
    fn test_empty_collection_keeps_empty_list() {
        let extraction = run(&section("R", "Vehicle", &[&[]]));
        assert_eq!(extraction.records[0].subdivisions, Some(Vec::new()));
    }

    #[test]
    fn test_section_order_preserved() {
        let html = format!(
            "{}{}{}",
            section("First", "P1", &[&["a"]]),
            section("Second", "P2", &[&["b"], &["c"]]),
            section("Third", "P3", &[&["d"]]),
        );
        let extraction = run(&html);
        let pairs: Vec<(&str, &str)> = extraction
            .records
            .iter()
            .map(|r| (r.region.as_str(), r.subdivisions.as_ref().unwrap()[0].as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("First", "a"), ("Second", "b"), ("Second", "c"), ("Third", "d")]
        );
    }

    #[test]
    fn test_missing_region_label_skips_section_only() {
        let html = format!(
            r#"<div class="dl-period"><h5>Vehicle</h5><div class="dl-level-2"></div></div>{}"#,
            section("Kept", "Vehicle", &[&["x"]])
        );
        let extraction = run(&html);
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.records[0].region, "Kept");
        assert_eq!(
            extraction.skipped,
            vec![ExtractError::MissingElement {
                location: Location::Section { section: 0 },
                element: "driving-dates label",
            }]
        );
    }

    #[test]
    fn test_missing_heading_is_reported() {
        let html = r#"<div class="dl-period">
                        <p class="driving-dates">R</p>
                        <div class="dl-level-2"><span class="dl-level-name">A</span></div>
                      </div>"#;
        let extraction = run(html);
        assert!(extraction.records.is_empty());
        assert!(matches!(
            extraction.skipped[0],
            ExtractError::MissingElement {
                element: "h5 heading",
                ..
            }
        ));
    }

    #[test]
    fn test_blank_region_label_is_rejected() {
        let extraction = run(&section("   ", "Vehicle", &[&["x"]]));
        assert!(extraction.records.is_empty());
        assert_eq!(
            extraction.skipped,
            vec![ExtractError::EmptyField {
                location: Location::Section { section: 0 },
                field: Field::Region,
            }]
        );
    }

    #[test]
    fn test_blank_heading_is_rejected() {
        let extraction = run(&section("North", "  ", &[&["x"], &["y"]]));
        assert!(extraction.records.is_empty());
        assert_eq!(
            extraction.skipped,
            vec![ExtractError::EmptyField {
                location: Location::Section { section: 0 },
                field: Field::Period,
            }]
        );
    }

    #[test]
    fn test_section_without_collections_is_silent() {
        let extraction = run(r#"<div class="dl-period"><p>nothing</p></div>"#);
        assert!(extraction.is_empty());
    }

    #[test]
    fn test_only_span_subdivisions_count() {
        let html = r#"<div class="dl-period">
                        <h5>Vehicle</h5><p class="driving-dates">R</p>
                        <div class="dl-level-2">
                          <span class="dl-level-name">Kept</span>
                          <div class="dl-level-name">Ignored</div>
                        </div>
                      </div>"#;
        let extraction = run(html);
        assert_eq!(extraction.records[0].subdivisions.as_ref().unwrap(), &["Kept"]);
    }

    #[test]
    fn test_subdivision_name() {
        assert_eq!(subdivision_name(" East, ").as_deref(), Some("East"));
        assert_eq!(subdivision_name("West").as_deref(), Some("West"));
        assert_eq!(subdivision_name("a,,").as_deref(), Some("a,"));
        assert_eq!(subdivision_name("  "), None);
        assert_eq!(subdivision_name(","), None);
    }
}
