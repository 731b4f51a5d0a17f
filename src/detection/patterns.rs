//! Signal lists and thresholds for every Shopify heuristic.
//!
//! These values were tuned by hand against live storefronts. There is no
//! labelled dataset behind them, so any change here is a behavior change and
//! needs its own fixtures.

use regex::Regex;

use crate::result::Result;

/// Minimum number of platform probes that must hit for a Shopify match.
/// The bare keyword alone is never enough.
pub const PLATFORM_SIGNAL_THRESHOLD: usize = 2;

/// Architecture score at or above which a theme looks like a conventional
/// (Dawn-family) theme.
pub const CONVENTIONAL_LIKE_MIN_SCORE: usize = 5;

/// Architecture score at or above which a theme is classed as custom.
pub const CUSTOM_MIN_SCORE: usize = 2;

/// Minimum number of app signals for a store to count as app-heavy.
pub const APP_HEAVY_THRESHOLD: usize = 2;

/// Distinct `app.<name>.com` hosts must exceed this to count as a signal.
pub const APP_SUBDOMAIN_THRESHOLD: usize = 3;

pub const CDN_HOST: &str = "cdn.shopify.com";
pub const THEME_GLOBAL: &str = "Shopify.theme";

pub const SECTION_MARKER: &str = "shopify-section";
pub const SECTION_ID_ATTRIBUTE: &str = "data-section-id";

/// Substring signals counted by the architecture score, in evaluation order.
/// The accessibility and class-color signals are evaluated separately.
pub const ARCHITECTURE_TOKENS: [&str; 5] = [
    "color-scheme",
    "gradient",
    "page-width",
    "section-template",
    SECTION_MARKER,
];
pub const MEDIA_WRAPPER: &str = "media-wrapper";
pub const ARIA_PREFIX: &str = "aria-";

/// Reviews, email marketing and support chat vendors.
pub const APP_VENDOR_TOKENS: [&str; 5] =
    ["judge.me", "klaviyo", "yotpo", "gorgias", "privy"];

pub const LEGACY_THEME_WARNING: &str = "Legacy theme detected: no section \
     schemas found, so section-based customization may not be available";
pub const APP_HEAVY_WARNING: &str = "Store relies on many third-party apps; \
     app-injected content may not be reproduced on generated pages";
pub const LIMITED_ACCESSIBILITY_WARNING: &str =
    "Limited accessibility attributes found in theme markup";

/// Compiled regular expressions used by the detectors.
///
/// Built once per [`Detector`](crate::detection::manager::Detector) and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct SignalPatterns {
    pub shopify_global: Regex,
    pub section_comment: Regex,
    pub keyword: Regex,
    pub json_script: Regex,
    pub css_utility_class: Regex,
    pub accessibility: Regex,
    pub class_color: Regex,
    pub app_subdomain: Regex,
    pub theme_version: Regex,
}

impl SignalPatterns {
    pub fn new() -> Result<Self> {
        Ok(Self {
            shopify_global: Regex::new(
                r"window\.Shopify\b|\bShopify\.(?:shop|routes|locale|currency)\b",
            )?,
            section_comment: Regex::new(
                r"<!--\s*BEGIN\s+(?:sections?|app\s+block)\b",
            )?,
            keyword: Regex::new(r"(?i)shopify")?,
            json_script: Regex::new(
                r#"(?i)type\s*=\s*["']application/json["']"#,
            )?,
            css_utility_class: Regex::new(
                r#"class\s*=\s*["'][^"']*\b(?:color-|gradient|page-width|section-)"#,
            )?,
            accessibility: Regex::new(r"\baria-[a-z]+|\brole\s*=")?,
            class_color: Regex::new(r#"class\s*=\s*["'][^"']*color-"#)?,
            app_subdomain: Regex::new(r"\bapp\.([a-z0-9-]+)\.com\b")?,
            theme_version: Regex::new(
                r#"Shopify\.theme\s*=\s*\{[^}]*"schema_version"\s*:\s*"([^"]+)""#,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_all_patterns() {
        assert!(SignalPatterns::new().is_ok());
    }

    #[test]
    fn thresholds_are_ordered() {
        assert!(CUSTOM_MIN_SCORE < CONVENTIONAL_LIKE_MIN_SCORE);
        assert!(PLATFORM_SIGNAL_THRESHOLD > 1);
    }

    #[test]
    fn accessibility_pattern_ignores_json_role_keys() {
        let patterns = SignalPatterns::new().unwrap();
        assert!(!patterns.accessibility.is_match(r#"{"role":"main"}"#));
        assert!(patterns.accessibility.is_match(r#"<nav role="navigation">"#));
        assert!(patterns.accessibility.is_match(r#"<a aria-label="Home">"#));
    }

    #[test]
    fn css_utility_pattern_only_reads_class_attributes() {
        let patterns = SignalPatterns::new().unwrap();
        assert!(
            patterns
                .css_utility_class
                .is_match(r#"<div class="grid page-width">"#)
        );
        assert!(
            !patterns
                .css_utility_class
                .is_match(r#"<div data-layout="page-width">"#)
        );
    }
}
