use thiserror::Error;

/// Errors that abort a crawl run.
///
/// Any fetch failure is fatal to the current `run` call: there is no retry
/// layer in this crate and no partial result is returned. Callers wanting
/// resilience wrap [`crate::Crawler::run`] from the outside.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}
