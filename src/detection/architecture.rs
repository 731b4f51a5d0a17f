//! Theme architecture classification and app-heaviness.
//!
//! The score is a plain count of independent signals, not a probability.
//! Bands are deliberately conservative: a high score means a theme *looks
//! like* a conventional section theme, nothing more.

use std::collections::HashSet;

use crate::detection::{
    patterns::{
        APP_HEAVY_THRESHOLD, APP_SUBDOMAIN_THRESHOLD, APP_VENDOR_TOKENS,
        ARCHITECTURE_TOKENS, ARIA_PREFIX, CONVENTIONAL_LIKE_MIN_SCORE,
        CUSTOM_MIN_SCORE, MEDIA_WRAPPER, SignalPatterns,
    },
    types::{DetectedFeatures, ThemeArchitecture},
};

/// Modern (Online Store 2.0) themes ship both sections and JSON templates
pub fn is_modern_architecture(features: &DetectedFeatures) -> bool {
    features.section_schemas && features.json_templates
}

/// Count the architecture signals present in `html`
pub fn architecture_score(
    html: &str,
    features: &DetectedFeatures,
    patterns: &SignalPatterns,
) -> usize {
    let token_hits = ARCHITECTURE_TOKENS
        .iter()
        .filter(|token| html.contains(*token))
        .count();

    let signals = [
        features.accessibility_attributes && html.contains(ARIA_PREFIX),
        html.contains(MEDIA_WRAPPER),
        patterns.class_color.is_match(html),
    ];

    token_hits + signals.iter().filter(|hit| **hit).count()
}

/// Map an architecture score onto its band
pub fn classify_architecture(score: usize) -> ThemeArchitecture {
    if score >= CONVENTIONAL_LIKE_MIN_SCORE {
        ThemeArchitecture::ConventionalLike
    } else if score >= CUSTOM_MIN_SCORE {
        ThemeArchitecture::Custom
    } else {
        ThemeArchitecture::Unknown
    }
}

/// Number of distinct `app.<name>.com` hosts referenced by the page
pub fn distinct_app_subdomains(html: &str, patterns: &SignalPatterns) -> usize {
    patterns
        .app_subdomain
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect::<HashSet<_>>()
        .len()
}

/// Count third-party app signals: one per vendor token plus one when the
/// page references more than [`APP_SUBDOMAIN_THRESHOLD`] app hosts
pub fn app_signal_count(html: &str, patterns: &SignalPatterns) -> usize {
    let vendor_hits = APP_VENDOR_TOKENS
        .iter()
        .filter(|token| html.contains(*token))
        .count();

    let many_app_hosts =
        distinct_app_subdomains(html, patterns) > APP_SUBDOMAIN_THRESHOLD;

    vendor_hits + usize::from(many_app_hosts)
}

pub fn is_app_heavy(html: &str, patterns: &SignalPatterns) -> bool {
    app_signal_count(html, patterns) >= APP_HEAVY_THRESHOLD
}
