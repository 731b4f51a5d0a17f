//! Page fetching abstraction.
//!
//! Detection only ever needs the raw HTML of one page. Keeping the fetch
//! behind a trait lets the validator run against the network, saved pages
//! or test mocks without caring which.

use async_trait::async_trait;
use url::Url;

use crate::error::ValidationError;

pub mod http;

pub use http::HttpFetcher;

/// Source of raw page HTML.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the HTML body of `url`.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - the full response body
    /// * `Err(ValidationError::UnreachableTarget)` - non-success status or
    ///   transport failure
    async fn fetch(&self, url: Url) -> Result<String, ValidationError>;
}
