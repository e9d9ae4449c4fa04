//! Per-site configuration and structural page reading.
//!
//! One adapter per catalog site, behind a common capability interface:
//! which listing to request per component kind, how cards are discovered and
//! filtered, how pagination works, and which DOM nodes hold a product's
//! image, price, name, and description text.

mod aeromotus;
mod mydrone;

pub use aeromotus::Aeromotus;
pub use mydrone::MyDrone;

use uavparts_core::ComponentKind;

use crate::cards::{CardLink, MatchRule};
use crate::patterns::PatternRegistry;

/// A listing request: URL plus query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl ListingRequest {
    #[must_use]
    pub fn new(url: impl Into<String>, query: &[(&str, &str)]) -> Self {
        Self {
            url: url.into(),
            query: query
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        }
    }
}

/// Structural fields read from one product page. Transient: consumed
/// immediately by attribute extraction and record assembly.
#[derive(Debug, Clone, Default)]
pub struct RawCard {
    pub image: Option<String>,
    pub price: Option<String>,
    pub name: Option<String>,
    /// Description/specification sections as joined plain text.
    pub text_blocks: Vec<String>,
}

/// Capability interface one catalog site implements.
///
/// Pure configuration plus structural reads; adapters hold no mutable state
/// and are safe to share across crawl runs.
pub trait SiteAdapter: Send + Sync {
    fn id(&self) -> SiteId;

    /// Listing request for `kind`, or `None` when the site does not carry
    /// the category (the crawl then returns empty without fetching).
    fn request_for(&self, kind: ComponentKind) -> Option<ListingRequest>;

    /// Card-title filtering rule for `kind`.
    fn keywords_for(&self, kind: ComponentKind) -> MatchRule;

    /// URL of listing page `page` (2-based callers; page 1 is the request URL).
    fn page_url(&self, request: &ListingRequest, page: usize) -> String;

    /// Total page count read from the listing's pagination indicator, or
    /// `None` when no indicator is found or it does not parse — the
    /// degenerate single-page case.
    fn page_count(&self, listing_html: &str) -> Option<usize>;

    /// Product cards discovered on a listing page, in document order.
    /// Cards lacking a link element are skipped silently.
    fn card_links(&self, listing_html: &str) -> Vec<CardLink>;

    /// Structural fields of one product page.
    fn read_card(&self, page_html: &str) -> RawCard;

    /// The site's attribute pattern set.
    fn registry(&self) -> &PatternRegistry;
}

/// Identifier of a supported catalog site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteId {
    Aeromotus,
    MyDrone,
}

impl SiteId {
    pub const ALL: &'static [SiteId] = &[SiteId::Aeromotus, SiteId::MyDrone];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SiteId::Aeromotus => "aeromotus",
            SiteId::MyDrone => "mydrone",
        }
    }
}

impl std::fmt::Display for SiteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SiteId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SiteId::ALL
            .iter()
            .copied()
            .find(|site| site.as_str() == s)
            .ok_or_else(|| format!("unknown site: {s}"))
    }
}

/// Builds the adapter for `site` with its production base URL.
#[must_use]
pub fn adapter_for(site: SiteId) -> Box<dyn SiteAdapter> {
    match site {
        SiteId::Aeromotus => Box::new(Aeromotus::new()),
        SiteId::MyDrone => Box::new(MyDrone::new()),
    }
}
