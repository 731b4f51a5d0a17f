//! Fetches and classifies storefront URLs
use log::*;

use crate::{
    command::common::{Report, print_reports},
    config::Config,
    detection::types::ValidationResult,
    result::Result,
    validator::UrlValidator,
};

pub async fn execute(
    config: &Config,
    urls: &[String],
    json: bool,
) -> Result<()> {
    let validator = UrlValidator::from_config(config)?;
    let results = validate_all(&validator, urls).await;

    let reports: Vec<Report> = urls
        .iter()
        .zip(results.iter())
        .map(|(url, result)| Report {
            target: url.as_str(),
            result,
        })
        .collect();

    print_reports(&reports, json)
}

/// Validate each URL in order, one request at a time.
pub async fn validate_all(
    validator: &UrlValidator,
    urls: &[String],
) -> Vec<ValidationResult> {
    let mut results = Vec::with_capacity(urls.len());

    for url in urls.iter() {
        info!("checking {url}");
        results.push(validator.validate(url).await);
    }

    results
}


/// Live storefront checks. Run with `--features _integration_tests` and
/// `STOREPROBE_TEST_URL` pointing at a known Shopify store.
#[cfg(test)]
#[cfg(feature = "_integration_tests")]
mod integration_tests {
    use std::env;

    use crate::{config::Config, validator::UrlValidator};

    #[tokio::test]
    #[test_log::test]
    async fn test_live_storefront() {
        let url = env::var("STOREPROBE_TEST_URL").unwrap();
        let validator = UrlValidator::from_config(&Config::default()).unwrap();

        let result = validator.validate(&url).await;

        assert!(result.error.is_none(), "{:?}", result.error);
        assert!(result.is_platform_match);
    }
}
