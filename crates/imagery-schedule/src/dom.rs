//! Typed document-tree abstraction.
//!
//! Extractors only see [`DomNode`]; the concrete tree comes from
//! [`HtmlDocument`], which wraps `scraper`. Selectors are expressed as
//! [`Query`] values, so lookups cannot fail to parse at runtime.

use scraper::{ElementRef, Html};

/// A typed element matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'q> {
    /// Elements with the given tag name.
    Tag(&'q str),
    /// Elements carrying the given class.
    Class(&'q str),
    /// Elements with the given tag name and class.
    TagClass(&'q str, &'q str),
    /// The element with the given `id` attribute.
    Id(&'q str),
}

impl Query<'_> {
    /// Whether `node` satisfies this query.
    pub fn matches<N: DomNode>(&self, node: &N) -> bool {
        match *self {
            Query::Tag(tag) => node.name().eq_ignore_ascii_case(tag),
            Query::Class(class) => node.has_class(class),
            Query::TagClass(tag, class) => {
                node.name().eq_ignore_ascii_case(tag) && node.has_class(class)
            }
            Query::Id(id) => node.attribute("id") == Some(id),
        }
    }
}

/// Read-only view of one element in a parsed document.
pub trait DomNode: Clone {
    /// Lower-case tag name.
    fn name(&self) -> &str;

    fn attribute(&self, name: &str) -> Option<&str>;

    /// Direct element children in document order. Text nodes are not included.
    fn children(&self) -> Vec<Self>;

    /// Element siblings before this node, nearest first.
    fn previous_siblings(&self) -> Vec<Self>;

    /// Concatenated text of all descendants, untrimmed.
    fn text(&self) -> String;

    /// All descendants matching `query`, in pre-order. The node itself is excluded.
    fn find_all(&self, query: &Query<'_>) -> Vec<Self> {
        let mut found = Vec::new();
        let mut stack: Vec<Self> = self.children().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            if query.matches(&node) {
                found.push(node.clone());
            }
            stack.extend(node.children().into_iter().rev());
        }
        found
    }

    /// First descendant matching `query`.
    fn find(&self, query: &Query<'_>) -> Option<Self> {
        self.find_all(query).into_iter().next()
    }

    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .map(|c| c.split_ascii_whitespace().any(|name| name == class))
            .unwrap_or(false)
    }
}

/// An owned, parsed HTML document.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document. Parsing is lenient and never fails.
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// The `<html>` element.
    pub fn root(&self) -> HtmlNode<'_> {
        HtmlNode(self.html.root_element())
    }
}

/// [`DomNode`] over a `scraper` element.
#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a>(ElementRef<'a>);

impl<'a> DomNode for HtmlNode<'a> {
    fn name(&self) -> &str {
        self.0.value().name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.0.value().attr(name)
    }

    fn children(&self) -> Vec<Self> {
        self.0
            .children()
            .filter_map(ElementRef::wrap)
            .map(HtmlNode)
            .collect()
    }

    fn previous_siblings(&self) -> Vec<Self> {
        self.0
            .prev_siblings()
            .filter_map(ElementRef::wrap)
            .map(HtmlNode)
            .collect()
    }

    fn text(&self) -> String {
        self.0.text().collect()
    }
}
