//! HTTP utilities for basketball-reference.com

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::{BbrError, Result};


/// Origin of basketball-reference.com; player hrefs are site-relative to it.
pub const BBR_BASE_URL: &str = "https://www.basketball-reference.com";

const USER_AGENT: &str = concat!("bbref-stats/", env!("CARGO_PKG_VERSION"));

/// Knobs for every page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    /// Site origin, without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
    /// Extra attempts after the first failure. Only retryable failures count.
    pub retries: u32,
    /// Back-off unit; attempt `n` waits `n * retry_delay`.
    pub retry_delay: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: BBR_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            retries: 2,
            retry_delay: Duration::from_secs(1),
        }
    }
}

/// Page fetcher shared by the roster and season scrapers.
///
/// Cloning is cheap; the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct SiteClient {
    client: Client,
    settings: FetchSettings,
}

impl SiteClient {
    pub fn new(mut settings: FetchSettings) -> Result<Self> {
        settings.base_url = settings.base_url.trim_end_matches('/').to_string();
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(settings.timeout)
            .build()?;

        Ok(Self { client, settings })
    }

    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    /// GET `url` and return the body, retrying transport errors, 429 and 5xx.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        let mut attempt = 0;
        loop {
            match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(err) if attempt < self.settings.retries && err.is_retryable() => {
                    attempt += 1;
                    let delay = self.settings.retry_delay * attempt;
                    warn!(url, attempt, error = %err, ?delay, "fetch failed, retrying");
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn fetch_once(&self, url: &str) -> Result<String> {
        debug!(url, "GET");
        let res = self.client.get(url).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(BbrError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = res.text().await?;
        debug!(url, bytes = body.len(), "fetched");
        Ok(body)
    }
}
