//! Entry point that fetches a storefront and classifies it.
use log::*;
use url::Url;

use crate::{
    config::Config,
    detection::{manager::Detector, types::ValidationResult},
    error::ValidationError,
    fetcher::{HttpFetcher, PageFetcher},
    result::Result,
};

/// Validates storefront URLs.
///
/// Holds only immutable configuration, so a single instance can serve
/// concurrent validations of different URLs. Construct one where it is
/// needed; there is no global instance.
pub struct UrlValidator {
    fetcher: Box<dyn PageFetcher>,
    detector: Detector,
}

impl UrlValidator {
    pub fn new(fetcher: Box<dyn PageFetcher>, detector: Detector) -> Self {
        Self { fetcher, detector }
    }

    /// Build a validator that fetches over HTTP using `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.fetch)?;
        Ok(Self::new(Box::new(fetcher), Detector::new()?))
    }

    /// Fetch and classify `url`.
    ///
    /// Never fails: an invalid URL, an unreachable page or a page that is not
    /// a Shopify store all come back as a result with `error` set.
    pub async fn validate(&self, url: &str) -> ValidationResult {
        match self.fetch_page(url).await {
            Ok(html) => {
                let result = self.detector.analyze(&html);
                if let Some(err) = &result.error {
                    info!("{url}: {err}");
                }
                result
            }
            Err(err) => {
                warn!("failed to validate {url}: {err}");
                ValidationResult::failure(&err)
            }
        }
    }

    /// Classify HTML that was obtained elsewhere
    pub fn validate_html(&self, html: &str) -> ValidationResult {
        self.detector.analyze(html)
    }

    async fn fetch_page(
        &self,
        url: &str,
    ) -> std::result::Result<String, ValidationError> {
        let url = Url::parse(url.trim())?;
        self.fetcher.fetch(url).await
    }
}
