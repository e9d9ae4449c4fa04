//! Adapter for mydrone.ru (CS-Cart storefront).

use scraper::Html;

use uavparts_core::{AttributeKind, ComponentKind};

use crate::cards::{CardLink, MatchRule};
use crate::html::{attr, first, text_joined};
use crate::patterns::{coerce_int, Pattern, PatternRegistry};
use crate::sites::{ListingRequest, RawCard, SiteAdapter, SiteId};

const BASE_URL: &str = "https://mydrone.ru/";

/// Category path per component kind, relative to the site root. Kinds not
/// listed here are absent from the site.
const CATEGORY_PATHS: &[(ComponentKind, &str)] = &[
    (ComponentKind::Battery, "kupit/dji/akkumulyatory/"),
    (ComponentKind::ElectricMotor, "kupit/fpv/komponenty/motory/"),
    (
        ComponentKind::FlightController,
        "kupit/fpv/komponenty/poletnye-kontrollery/",
    ),
    (
        ComponentKind::Lidar,
        "kupit/spec.-resheniya/geodezicheskaya-semka/",
    ),
    (ComponentKind::UavCopterType, "kupit/kvadrokopter/dji/"),
    (
        ComponentKind::VideoTransmitter,
        "kupit/fpv/komponenty/peredacha-video/",
    ),
    (ComponentKind::ControlPanel, "kupit/fpv/apparatura/"),
];

/// mydrone.ru: fixed category listings sized to fit one page, so the whole
/// category is read from a single request and every card is taken.
pub struct MyDrone {
    base_url: String,
    registry: PatternRegistry,
}

impl MyDrone {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Adapter pointed at an alternative origin. Test seam: crawl tests run
    /// against a local mock server.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        // Spec tables on this site often label capacity without a unit
        // ("Емкость аккумулятора 3850"), so a labeled fallback pattern runs
        // after the unit-bearing standard ones.
        let mut registry = PatternRegistry::standard();
        registry.register(
            AttributeKind::Capacity,
            Pattern::new(
                "capacity_after_label_ru",
                r"(?i)емкость[^0-9]{0,30}(\d[\d\s]*\d|\d)",
                coerce_int,
            ),
        );
        Self { base_url, registry }
    }
}

impl Default for MyDrone {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteAdapter for MyDrone {
    fn id(&self) -> SiteId {
        SiteId::MyDrone
    }

    fn request_for(&self, kind: ComponentKind) -> Option<ListingRequest> {
        CATEGORY_PATHS
            .iter()
            .find(|(category, _)| *category == kind)
            .map(|(_, path)| {
                ListingRequest::new(
                    format!("{}{path}", self.base_url),
                    &[("items_per_page", "96")],
                )
            })
    }

    fn keywords_for(&self, _kind: ComponentKind) -> MatchRule {
        // Category listings are already scoped; every card qualifies.
        MatchRule::All
    }

    fn page_url(&self, request: &ListingRequest, _page: usize) -> String {
        // Single-page listings; page_count never reports more than one page.
        request.url.clone()
    }

    fn page_count(&self, _listing_html: &str) -> Option<usize> {
        None
    }

    fn card_links(&self, listing_html: &str) -> Vec<CardLink> {
        let doc = Html::parse_document(listing_html);
        let mut links = Vec::new();
        for anchor in doc.select(&crate::html::selector("a.product-title")) {
            let Some(url) = attr(anchor, "href") else {
                continue;
            };
            let title = Some(text_joined(anchor)).filter(|t| !t.is_empty());
            links.push(CardLink { title, url });
        }
        links
    }

    fn read_card(&self, page_html: &str) -> RawCard {
        let doc = Html::parse_document(page_html);

        let image = first(&doc, "img").and_then(|img| attr(img, "src"));
        let price = first(&doc, "span.ty-price-num")
            .map(text_joined)
            .and_then(|raw| clean_price(&raw));
        let name = first(&doc, "h1.ut2-pb__title").map(text_joined);

        let text_blocks = first(&doc, "div#tabs_content")
            .map(text_joined)
            .into_iter()
            .collect();

        RawCard {
            image,
            price,
            name,
            text_blocks,
        }
    }

    fn registry(&self) -> &PatternRegistry {
        &self.registry
    }
}

/// Collapses non-breaking thousands separators and trims.
fn clean_price(raw: &str) -> Option<String> {
    let cleaned = raw.replace('\u{a0}', " ").trim().to_owned();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
#[path = "mydrone_test.rs"]
mod tests;
