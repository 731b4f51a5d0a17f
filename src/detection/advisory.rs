use crate::detection::{
    patterns::{
        APP_HEAVY_WARNING, LEGACY_THEME_WARNING, LIMITED_ACCESSIBILITY_WARNING,
        SignalPatterns,
    },
    types::DetectedFeatures,
};

/// Extract the theme schema version from the `Shopify.theme` global, if the
/// page exposes one
pub fn extract_platform_version(
    html: &str,
    patterns: &SignalPatterns,
) -> Option<String> {
    patterns
        .theme_version
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Advisory warnings, always in the order legacy theme, app-heavy, limited
/// accessibility
pub fn collect_warnings(
    features: &DetectedFeatures,
    app_heavy: bool,
) -> Vec<String> {
    let mut warnings = vec![];

    if !features.section_schemas {
        warnings.push(LEGACY_THEME_WARNING.to_string());
    }

    if app_heavy {
        warnings.push(APP_HEAVY_WARNING.to_string());
    }

    if !features.accessibility_attributes {
        warnings.push(LIMITED_ACCESSIBILITY_WARNING.to_string());
    }

    warnings
}
