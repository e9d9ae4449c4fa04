//! Named text patterns for physical component attributes.
//!
//! Each [`Pattern`] pairs a compiled regex (capture group 1 holds the raw
//! value) with a coercion function that turns the captured text into a typed
//! [`AttrValue`]. Patterns for the same [`AttributeKind`] are tried in
//! registration order; the first successful coercion wins. A pattern that
//! matches syntactically but fails coercion counts as "no match" and the
//! next pattern is tried.

use std::collections::HashMap;

use regex::Regex;

use uavparts_core::{AttrValue, AttributeKind};

/// A compiled matching rule plus value coercion for one attribute.
pub struct Pattern {
    name: &'static str,
    regex: Regex,
    coerce: fn(&str) -> Option<AttrValue>,
}

impl Pattern {
    /// Compiles `pattern`, which must contain at least one capture group.
    #[must_use]
    pub fn new(name: &'static str, pattern: &str, coerce: fn(&str) -> Option<AttrValue>) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("valid regex"),
            coerce,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Applies the pattern to `text`, returning the coerced value of the
    /// first match, or `None` on no match or coercion failure.
    #[must_use]
    pub fn apply(&self, text: &str) -> Option<AttrValue> {
        let captures = self.regex.captures(text)?;
        let raw = captures.get(1)?.as_str();
        (self.coerce)(raw)
    }
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pattern")
            .field("name", &self.name)
            .field("regex", &self.regex.as_str())
            .finish_non_exhaustive()
    }
}

/// Parses an integer after dropping whitespace group separators
/// (`"5 200"` → `5200`).
pub fn coerce_int(raw: &str) -> Option<AttrValue> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    compact.parse::<u64>().ok().map(AttrValue::Int)
}

/// Parses a decimal number, accepting a comma decimal separator
/// (`"14,8"` → `14.8`).
pub fn coerce_float(raw: &str) -> Option<AttrValue> {
    raw.replace(',', ".").parse::<f64>().ok().map(AttrValue::Float)
}

/// Lowercases and trims the captured text.
pub fn coerce_text(raw: &str) -> Option<AttrValue> {
    let text = raw.trim().to_lowercase();
    if text.is_empty() {
        None
    } else {
        Some(AttrValue::Text(text))
    }
}

/// Ordered pattern lists per attribute kind for one site.
///
/// Immutable after construction. `patterns_for` returns an empty slice for
/// kinds with no registered pattern, which extraction treats as a guaranteed
/// miss rather than an error.
#[derive(Debug, Default)]
pub struct PatternRegistry {
    by_kind: HashMap<AttributeKind, Vec<Pattern>>,
}

impl PatternRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `pattern` at the lowest priority for `kind`.
    pub fn register(&mut self, kind: AttributeKind, pattern: Pattern) {
        self.by_kind.entry(kind).or_default().push(pattern);
    }

    /// Patterns for `kind` in priority order; empty when none are defined.
    #[must_use]
    pub fn patterns_for(&self, kind: AttributeKind) -> &[Pattern] {
        self.by_kind.get(&kind).map_or(&[], Vec::as_slice)
    }

    /// The base pattern set shared by all sites.
    ///
    /// Latin unit spellings are tried before Cyrillic ones because supplier
    /// spec tables on both sites quote units in Latin even when the
    /// surrounding prose is Russian.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();

        registry.register(
            AttributeKind::Capacity,
            Pattern::new("capacity_mah", r"(?i)(\d[\d\s]*?)\s*mah\b", coerce_int),
        );
        registry.register(
            AttributeKind::Capacity,
            Pattern::new(
                "capacity_mah_ru",
                r"(?i)(\d[\d\s]*?)\s*(?:ма·ч|мач|ма/ч)",
                coerce_int,
            ),
        );

        // A bare Cyrillic "в" unit is indistinguishable from the preposition
        // ("2 в комплекте"), so single-letter Russian volts are only read
        // after a "напряжение" label.
        registry.register(
            AttributeKind::Voltage,
            Pattern::new(
                "voltage_volts",
                r"(?i)(\d+(?:[.,]\d+)?)\s*(?:v\b|вольт)",
                coerce_float,
            ),
        );
        registry.register(
            AttributeKind::Voltage,
            Pattern::new(
                "voltage_after_label_ru",
                r"(?i)напряжение[^0-9]{0,30}(\d+(?:[.,]\d+)?)",
                coerce_float,
            ),
        );

        registry.register(
            AttributeKind::CurrentDischarge,
            Pattern::new("discharge_c", r"(?i)(\d+)\s*[cс]\b", coerce_int),
        );

        registry.register(
            AttributeKind::Shape,
            Pattern::new("shape_cells", r"(?i)\b(\d{1,2}s(?:\d{1,2}p)?)\b", coerce_text),
        );

        registry.register(
            AttributeKind::KvRating,
            Pattern::new("kv_rating", r"(?i)\b(\d{2,5})\s*kv\b", coerce_int),
        );

        registry.register(
            AttributeKind::Weight,
            Pattern::new(
                "weight_grams",
                r"(?i)(\d+(?:[.,]\d+)?)\s*(?:g|г|гр|грамм)\b",
                coerce_float,
            ),
        );

        registry
    }
}

#[cfg(test)]
#[path = "patterns_test.rs"]
mod tests;
