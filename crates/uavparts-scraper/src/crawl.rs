//! The crawl orchestrator: one full listing walk for one component kind.

use uavparts_core::{
    AttributeKind, BatteryRecord, CommonFields, ComponentKind, ComponentRecord, CrawlResult,
    FlightControllerRecord, GenericRecord, MotorRecord,
};

use crate::cards::{filter_cards, MatchRule};
use crate::error::ScrapeError;
use crate::extract::FieldExtractor;
use crate::fetch::PageClient;
use crate::sites::SiteAdapter;

/// Drives one site adapter through the full crawl:
/// listing → pagination → card filtering → per-card extraction.
///
/// Holds no mutable state between runs; `run` may be called repeatedly and
/// each call produces a fresh [`CrawlResult`].
pub struct Crawler {
    client: PageClient,
    adapter: Box<dyn SiteAdapter>,
}

impl Crawler {
    #[must_use]
    pub fn new(client: PageClient, adapter: Box<dyn SiteAdapter>) -> Self {
        Self { client, adapter }
    }

    /// Crawls the site for `kind` and returns all matching products keyed
    /// by URL.
    ///
    /// When the site has no listing for `kind`, returns an empty result
    /// without touching the network. When the listing exposes no parseable
    /// pagination indicator, only the first page's cards are processed.
    /// A card whose record fails validation is logged and skipped; the rest
    /// of the crawl continues.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError`] on any fetch failure (transport error or
    /// non-2xx status). The run is all-or-nothing: no partial result
    /// survives a failed fetch.
    pub async fn run(&self, kind: ComponentKind) -> Result<CrawlResult, ScrapeError> {
        let mut result = CrawlResult::new();

        let Some(request) = self.adapter.request_for(kind) else {
            tracing::debug!(site = %self.adapter.id(), component = %kind, "kind not offered by site");
            return Ok(result);
        };
        let rule = self.adapter.keywords_for(kind);

        let listing = self.client.fetch(&request.url, &request.query).await?;
        let pages = self.adapter.page_count(&listing);
        if pages.is_none() {
            tracing::debug!(site = %self.adapter.id(), "no pagination indicator; treating listing as a single page");
        }

        self.collect_cards(kind, &listing, &rule, &mut result).await?;

        for page in 2..=pages.unwrap_or(1) {
            let url = self.adapter.page_url(&request, page);
            tracing::debug!(site = %self.adapter.id(), page, "fetching listing page");
            let html = self.client.fetch(&url, &request.query).await?;
            self.collect_cards(kind, &html, &rule, &mut result).await?;
        }

        tracing::info!(
            site = %self.adapter.id(),
            component = %kind,
            products = result.len(),
            "crawl finished"
        );
        Ok(result)
    }

    async fn collect_cards(
        &self,
        kind: ComponentKind,
        listing_html: &str,
        rule: &MatchRule,
        result: &mut CrawlResult,
    ) -> Result<(), ScrapeError> {
        for link in filter_cards(self.adapter.card_links(listing_html), rule) {
            let html = self.client.fetch(&link.url, &[]).await?;
            let card = self.adapter.read_card(&html);
            let extractor = FieldExtractor::new(&card.text_blocks, self.adapter.registry());

            let common = match CommonFields::new(
                link.url.clone(),
                card.image,
                card.price,
                card.name.unwrap_or_default(),
            ) {
                Ok(common) => common,
                Err(err) => {
                    tracing::warn!(url = %link.url, error = %err, "skipping card with invalid record");
                    continue;
                }
            };

            result.insert(link.url, assemble_record(kind, common, &extractor));
        }
        Ok(())
    }
}

/// Builds the kind-specific record from the common fields and the product's
/// extracted attributes. Exhaustive over [`ComponentKind`]; kinds without a
/// dedicated attribute set get a generic record.
#[must_use]
pub fn assemble_record(
    kind: ComponentKind,
    common: CommonFields,
    extractor: &FieldExtractor<'_>,
) -> ComponentRecord {
    match kind {
        ComponentKind::Battery => ComponentRecord::Battery(BatteryRecord {
            common,
            capacity_mah: extractor.find_int(AttributeKind::Capacity),
            voltage_v: extractor.find_float(AttributeKind::Voltage),
            discharge_c: extractor.find_int(AttributeKind::CurrentDischarge),
            cell_shape: extractor.find_text(AttributeKind::Shape),
        }),
        ComponentKind::ElectricMotor => ComponentRecord::ElectricMotor(MotorRecord {
            common,
            kv_rating: extractor.find_int(AttributeKind::KvRating),
            voltage_v: extractor.find_float(AttributeKind::Voltage),
            weight_g: extractor.find_float(AttributeKind::Weight),
        }),
        ComponentKind::FlightController => {
            ComponentRecord::FlightController(FlightControllerRecord {
                common,
                voltage_v: extractor.find_float(AttributeKind::Voltage),
                weight_g: extractor.find_float(AttributeKind::Weight),
            })
        }
        ComponentKind::Microcontroller
        | ComponentKind::MotorController
        | ComponentKind::Lidar
        | ComponentKind::MicroFlightController
        | ComponentKind::Rangefinder
        | ComponentKind::SatelliteCommModule
        | ComponentKind::LeashingPlatform
        | ComponentKind::ThermalCamera
        | ComponentKind::UavCopterType
        | ComponentKind::VideoTransmitter
        | ComponentKind::Payload
        | ComponentKind::ControlPanel => ComponentRecord::Generic(GenericRecord {
            common,
            component: kind,
        }),
    }
}
