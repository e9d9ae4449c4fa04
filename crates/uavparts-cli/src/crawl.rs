//! Crawl command handler.

use std::path::Path;

use uavparts_core::{AppConfig, ComponentKind};
use uavparts_scraper::{adapter_for, Crawler, DelayRange, PageClient, SiteId};

/// Crawls `site` for `component` and writes the collected records as pretty
/// JSON to `out` (or stdout when no path is given).
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be constructed, a fetch
/// fails, or the output file cannot be written.
pub(crate) async fn run_crawl(
    config: &AppConfig,
    site: SiteId,
    component: ComponentKind,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    let delay = DelayRange::new(config.delay_min_ms, config.delay_max_ms);
    let client = PageClient::new(config.request_timeout_secs, &config.user_agent, delay)?;
    let crawler = Crawler::new(client, adapter_for(site));

    tracing::info!(%site, %component, "starting crawl");
    let result = crawler.run(component).await?;

    let json = serde_json::to_string_pretty(&result)?;
    match out {
        Some(path) => {
            std::fs::write(path, json)?;
            tracing::info!(path = %path.display(), products = result.len(), "wrote crawl output");
        }
        None => println!("{json}"),
    }

    Ok(())
}
