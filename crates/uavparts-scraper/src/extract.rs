//! First-match attribute extraction over a product's raw text blocks.

use uavparts_core::{AttrValue, AttributeKind};

use crate::patterns::PatternRegistry;

/// Answers "find the first value for attribute kind K" over the text blocks
/// gathered from one product page.
///
/// Blocks are joined with a single space at construction; patterns match
/// local context, so a block boundary can never produce a false span wider
/// than the separator. The extractor is read-only: the same text and
/// registry always produce the same answer, independent of the order in
/// which attribute kinds are queried.
pub struct FieldExtractor<'a> {
    text: String,
    registry: &'a PatternRegistry,
}

impl<'a> FieldExtractor<'a> {
    #[must_use]
    pub fn new(blocks: &[String], registry: &'a PatternRegistry) -> Self {
        Self {
            text: blocks.join(" "),
            registry,
        }
    }

    /// The joined text the patterns run against.
    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.text
    }

    /// First value for `kind` in registry priority order, or `None` when no
    /// pattern matches. Never panics, never substitutes a default.
    #[must_use]
    pub fn find_by(&self, kind: AttributeKind) -> Option<AttrValue> {
        self.registry
            .patterns_for(kind)
            .iter()
            .find_map(|pattern| pattern.apply(&self.text))
    }

    #[must_use]
    pub fn find_int(&self, kind: AttributeKind) -> Option<u64> {
        self.find_by(kind).and_then(|value| value.as_int())
    }

    #[must_use]
    pub fn find_float(&self, kind: AttributeKind) -> Option<f64> {
        self.find_by(kind).and_then(|value| value.as_float())
    }

    #[must_use]
    pub fn find_text(&self, kind: AttributeKind) -> Option<String> {
        self.find_by(kind)
            .and_then(|value| value.as_text().map(str::to_owned))
    }
}
