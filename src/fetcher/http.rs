//! Implements the PageFetcher trait over HTTP
use async_trait::async_trait;
use log::*;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::{
    config::FetchConfig, error::ValidationError, fetcher::PageFetcher,
    result::Result,
};

/// Fetches pages with a single GET using a browser user agent.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build the HTTP client from fetch settings. A zero timeout leaves the
    /// client without one.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);

        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(
        &self,
        url: Url,
    ) -> std::result::Result<String, ValidationError> {
        debug!("fetching {url}");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("{url} responded with {status}");
            return Err(ValidationError::http_status(status));
        }

        let html = response.text().await?;
        debug!("fetched {} bytes from {url}", html.len());

        Ok(html)
    }
}
