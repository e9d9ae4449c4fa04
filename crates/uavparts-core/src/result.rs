use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::record::ComponentRecord;

/// Products collected by one crawl run, keyed by product URL.
///
/// Iteration order is crawl order. Re-inserting an existing URL replaces the
/// record in place (last write wins, original position kept), so duplicate
/// listing entries collapse to a single record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrawlResult {
    entries: Vec<(String, ComponentRecord)>,
}

impl CrawlResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the record for `url`.
    pub fn insert(&mut self, url: impl Into<String>, record: ComponentRecord) {
        let url = url.into();
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| *key == url) {
            entry.1 = record;
        } else {
            self.entries.push((url, record));
        }
    }

    #[must_use]
    pub fn get(&self, url: &str) -> Option<&ComponentRecord> {
        self.entries
            .iter()
            .find(|(key, _)| key == url)
            .map(|(_, record)| record)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in crawl order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComponentRecord)> {
        self.entries
            .iter()
            .map(|(url, record)| (url.as_str(), record))
    }

    /// Product URLs in crawl order.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(url, _)| url.as_str())
    }
}

impl Serialize for CrawlResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (url, record) in &self.entries {
            map.serialize_entry(url, record)?;
        }
        map.end()
    }
}
