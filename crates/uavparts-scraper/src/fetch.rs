use std::time::Duration;

use rand::Rng;
use reqwest::Client;

use crate::error::ScrapeError;

/// Bounds for the politeness pause inserted after every network fetch.
///
/// The pause length is drawn uniformly from `min_ms..=max_ms` on each fetch.
/// A zero range disables the pause, which is how tests stay delay-free.
#[derive(Debug, Clone, Copy)]
pub struct DelayRange {
    min_ms: u64,
    max_ms: u64,
}

impl DelayRange {
    /// Builds a delay range; an inverted range is clamped to `min_ms`.
    #[must_use]
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min_ms,
            max_ms: max_ms.max(min_ms),
        }
    }

    /// A zero-length range: no pause at all.
    #[must_use]
    pub fn none() -> Self {
        Self::new(0, 0)
    }

    pub(crate) async fn pause(self) {
        if self.max_ms == 0 {
            return;
        }
        let ms = if self.min_ms == self.max_ms {
            self.max_ms
        } else {
            rand::rng().random_range(self.min_ms..=self.max_ms)
        };
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

/// HTTP client for listing and product pages.
///
/// Fetches are strictly sequential; each one is followed by the configured
/// politeness pause. Any non-2xx status or transport failure is returned as
/// a typed error — redirects are followed transparently by `reqwest`.
pub struct PageClient {
    client: Client,
    delay: DelayRange,
}

impl PageClient {
    /// Creates a `PageClient` with the given timeout, `User-Agent`, and
    /// politeness delay range.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str, delay: DelayRange) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, delay })
    }

    /// Fetches one page and returns its body text, then pauses.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::UnexpectedStatus`] — any non-2xx status.
    /// - [`ScrapeError::Http`] — transport or body-read failure.
    pub async fn fetch(&self, url: &str, query: &[(String, String)]) -> Result<String, ScrapeError> {
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        let body = response.text().await?;
        self.delay.pause().await;
        Ok(body)
    }
}
