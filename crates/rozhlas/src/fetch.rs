use async_trait::async_trait;

use crate::error::RozhlasError;
use crate::Result;

/// Capability to fetch a page as decoded text.
///
/// The pipeline never talks to the network directly; it goes through this
/// trait so tests can substitute canned page content.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` and return the response body, failing on transport errors
    /// and non-success statuses.
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// reqwest-backed fetcher used by the running service.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RozhlasError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        // Upstream pages are UTF-8; reqwest falls back to UTF-8 when the
        // charset header is missing.
        Ok(response.text().await?)
    }
}
