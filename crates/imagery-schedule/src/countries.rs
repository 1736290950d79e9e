//! List country identifiers from the locations directory page.

use crate::dom::{DomNode, HtmlDocument, Query};

/// `id` of the country selector on the directory page.
pub const COUNTRY_DROPDOWN_ID: &str = "country-dropdown";

/// Country identifiers in the order the selector lists them.
///
/// Options without a `value` are skipped. A page without the selector
/// yields an empty list.
pub fn list_countries<N: DomNode>(root: &N) -> Vec<String> {
    let Some(dropdown) = root.find(&Query::Id(COUNTRY_DROPDOWN_ID)) else {
        tracing::debug!("no #{COUNTRY_DROPDOWN_ID} element");
        return Vec::new();
    };

    dropdown
        .children()
        .iter()
        .filter_map(|option| {
            let value = option.attribute("value").map(str::trim).unwrap_or("");
            if value.is_empty() {
                let label = option.text();
                tracing::debug!("option without value: {}", label.trim());
                None
            } else {
                Some(value.to_string())
            }
        })
        .collect()
}

/// Whether `id` is usable as a single path segment: as a file name and
/// as the last segment of a country page URL.
///
/// Rejects empty names, `.`/`..`, path separators and URL delimiters.
pub fn is_valid_identifier(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\', ':', '?', '#'])
}

/// Parse a directory page and list its countries.
pub fn countries_from_html(html: &str) -> Vec<String> {
    let document = HtmlDocument::parse(html);
    list_countries(&document.root())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_countries_in_order() {
        let html = r#"
            <select id="country-dropdown">
              <option value="united-states">United States</option>
              <option value="japan">日本</option>
              <option value=" germany ">Deutschland</option>
            </select>"#;
        assert_eq!(
            countries_from_html(html),
            vec!["united-states", "japan", "germany"]
        );
    }

    #[test]
    fn test_options_without_value_are_skipped() {
        let html = r#"
            <select id="country-dropdown">
              <option>Choose a country</option>
              <option value="">--</option>
              <option value="france">France</option>
            </select>"#;
        assert_eq!(countries_from_html(html), vec!["france"]);
    }

    #[test]
    fn test_is_valid_identifier() {
        for id in ["japan", "united-states", "côte-d-ivoire"] {
            assert!(is_valid_identifier(id), "{id}");
        }
        for id in ["", ".", "..", "../x", "a/b", "a\\b", "https://other.host/", "x?y", "x#y"] {
            assert!(!is_valid_identifier(id), "{id}");
        }
    }

    #[test]
    fn test_missing_dropdown() {
        assert!(countries_from_html("<html><body></body></html>").is_empty());
    }
}
