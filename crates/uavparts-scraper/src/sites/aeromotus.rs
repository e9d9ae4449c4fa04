//! Adapter for aeromotus.ru (WooCommerce storefront).

use scraper::Html;

use uavparts_core::ComponentKind;

use crate::cards::{CardLink, MatchRule};
use crate::html::{attr, first, first_in, text_joined};
use crate::patterns::PatternRegistry;
use crate::sites::{ListingRequest, RawCard, SiteAdapter, SiteId};

const BASE_URL: &str = "https://aeromotus.ru/";

/// aeromotus.ru: search-driven listings with WooCommerce markup and an
/// `electro`-theme pagination block.
pub struct Aeromotus {
    base_url: String,
    registry: PatternRegistry,
}

impl Aeromotus {
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
        Self {
            base_url,
            registry: PatternRegistry::standard(),
        }
    }
}

impl Default for Aeromotus {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteAdapter for Aeromotus {
    fn id(&self) -> SiteId {
        SiteId::Aeromotus
    }

    fn request_for(&self, kind: ComponentKind) -> Option<ListingRequest> {
        match kind {
            ComponentKind::Battery => Some(ListingRequest::new(
                self.base_url.clone(),
                &[("s", "аккумулятор"), ("post_type", "product")],
            )),
            ComponentKind::UavCopterType => Some(ListingRequest::new(
                format!("{}product-tag/bpla", self.base_url),
                &[],
            )),
            _ => None,
        }
    }

    fn keywords_for(&self, kind: ComponentKind) -> MatchRule {
        match kind {
            ComponentKind::Battery => MatchRule::any_token(&["аккумулятор", "батарея"]),
            _ => MatchRule::All,
        }
    }

    fn page_url(&self, request: &ListingRequest, page: usize) -> String {
        format!("{}/page/{page}/", request.url.trim_end_matches('/'))
    }

    /// Reads the total page count from the `electro` pagination block.
    ///
    /// The block's text ends with the last page number followed by a single
    /// trailing glyph (e.g. `"Страница 1 из 7→"`), so the last whitespace
    /// token minus its final character is the count.
    fn page_count(&self, listing_html: &str) -> Option<usize> {
        let doc = Html::parse_document(listing_html);
        let nav = first(&doc, "nav.electro-advanced-pagination")?;
        let text = text_joined(nav);
        let last_token = text.split_whitespace().next_back()?;
        let mut chars = last_token.chars();
        chars.next_back()?;
        let pages: usize = chars.as_str().parse().ok()?;
        (pages > 0).then_some(pages)
    }

    fn card_links(&self, listing_html: &str) -> Vec<CardLink> {
        let doc = Html::parse_document(listing_html);
        let mut links = Vec::new();
        for card in doc.select(&crate::html::selector("li.product")) {
            let Some(anchor) = first_in(card, "a.woocommerce-LoopProduct-link") else {
                continue;
            };
            let Some(url) = attr(anchor, "href") else {
                continue;
            };
            let title = first_in(card, "h2.woocommerce-loop-product__title")
                .map(text_joined);
            links.push(CardLink { title, url });
        }
        links
    }

    fn read_card(&self, page_html: &str) -> RawCard {
        let doc = Html::parse_document(page_html);

        let image = first(&doc, "img.wp-post-image").and_then(|img| attr(img, "src"));
        let price = first(&doc, "p.price")
            .map(text_joined)
            .and_then(|raw| clean_price(&raw));
        let name = first(&doc, "h1.product_title").map(text_joined);

        let mut text_blocks = Vec::new();
        for section in ["div#tab-description", "div#tab-specification"] {
            if let Some(block) = first(&doc, section) {
                text_blocks.push(text_joined(block));
            }
        }

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

/// Drops everything from the first backslash onward and trims.
///
/// The theme appends an escaped markup tail to the visible price text; the
/// leading segment is the displayed price.
fn clean_price(raw: &str) -> Option<String> {
    let cleaned = raw.split_once('\\').map_or(raw, |(head, _)| head).trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_owned())
    }
}

#[cfg(test)]
#[path = "aeromotus_test.rs"]
mod tests;
