//! Decide which layout a page uses and run the matching extractor.

use crate::detailed;
use crate::dom::{DomNode, HtmlDocument, Query};
use crate::tabular;
use crate::types::Extraction;
use std::fmt;

/// Which of the two page layouts was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Tabular,
    Detailed,
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutKind::Tabular => f.write_str("tabular"),
            LayoutKind::Detailed => f.write_str("detailed"),
        }
    }
}

/// A page classified into its layout, holding what the extractor needs.
#[derive(Debug, Clone)]
pub enum Layout<N> {
    /// Every `<table>` in the page, in document order.
    Tabular(Vec<N>),
    /// The document root; sections are found beneath it.
    Detailed(N),
}

impl<N: DomNode> Layout<N> {
    /// One table anywhere in the page commits to the tabular layout.
    pub fn detect(root: N) -> Self {
        let tables = root.find_all(&Query::Tag("table"));
        if tables.is_empty() {
            Layout::Detailed(root)
        } else {
            Layout::Tabular(tables)
        }
    }

    pub fn kind(&self) -> LayoutKind {
        match self {
            Layout::Tabular(_) => LayoutKind::Tabular,
            Layout::Detailed(_) => LayoutKind::Detailed,
        }
    }

    pub fn extract(&self) -> Extraction {
        match self {
            Layout::Tabular(tables) => tabular::extract_tables(tables),
            Layout::Detailed(root) => detailed::extract_sections(root),
        }
    }
}

/// Parse a page, detect its layout and extract its schedule.
pub fn extract_document(html: &str) -> (LayoutKind, Extraction) {
    let document = HtmlDocument::parse(html);
    let layout = Layout::detect(document.root());
    let extraction = layout.extract();
    tracing::debug!(
        layout = %layout.kind(),
        records = extraction.records.len(),
        skipped = extraction.skipped.len(),
        "extracted document"
    );
    (layout.kind(), extraction)
}
