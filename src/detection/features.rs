use crate::detection::{
    patterns::{SECTION_ID_ATTRIBUTE, SECTION_MARKER, SignalPatterns},
    types::DetectedFeatures,
};

/// Compute the four theme feature flags.
///
/// Every flag has its own pattern and all four are always evaluated. Section
/// schemas need both the section wrapper and the per-section id attribute,
/// either one alone shows up on plenty of legacy themes.
pub fn detect_features(
    html: &str,
    patterns: &SignalPatterns,
) -> DetectedFeatures {
    DetectedFeatures {
        section_schemas: html.contains(SECTION_MARKER)
            && html.contains(SECTION_ID_ATTRIBUTE),
        json_templates: patterns.json_script.is_match(html),
        css_utility_patterns: patterns.css_utility_class.is_match(html),
        accessibility_attributes: patterns.accessibility.is_match(html),
    }
}
