pub mod cards;
pub mod crawl;
pub mod error;
pub mod extract;
pub mod fetch;
mod html;
pub mod patterns;
pub mod sites;

pub use cards::{filter_cards, CardLink, MatchRule};
pub use crawl::Crawler;
pub use error::ScrapeError;
pub use extract::FieldExtractor;
pub use fetch::{DelayRange, PageClient};
pub use patterns::{Pattern, PatternRegistry};
pub use sites::{adapter_for, ListingRequest, RawCard, SiteAdapter, SiteId};
