//! Thin helpers over the `scraper` DOM API.
//!
//! Site adapters express all of their structural reads through these
//! functions so selector parsing and text joining stay in one place.

use scraper::{ElementRef, Html, Selector};

/// Compiles a CSS selector. All selectors in this crate are static strings.
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// First element in the document matching `css`.
pub(crate) fn first<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    doc.select(&selector(css)).next()
}

/// First descendant of `element` matching `css`.
pub(crate) fn first_in<'a>(element: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    element.select(&selector(css)).next()
}

/// Reads an attribute value as an owned string.
pub(crate) fn attr(element: ElementRef<'_>, name: &str) -> Option<String> {
    element.value().attr(name).map(str::to_owned)
}

/// Joins an element's text nodes with single spaces, trimming each node.
///
/// Mirrors the "joined and stripped" text read the adapters need for
/// description sections: inner markup collapses to whitespace-separated
/// plain text and empty nodes disappear.
pub(crate) fn text_joined(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
