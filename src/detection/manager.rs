use log::*;

use crate::{
    detection::{
        advisory::{collect_warnings, extract_platform_version},
        architecture::{
            architecture_score, classify_architecture, is_app_heavy,
            is_modern_architecture,
        },
        features::detect_features,
        patterns::SignalPatterns,
        platform::detect_platform,
        types::ValidationResult,
    },
    error::ValidationError,
    result::Result,
};

/// Runs the detection pipeline over already fetched HTML.
///
/// Holds nothing but compiled patterns, so one instance can be shared
/// across tasks and every call is a pure function of its input.
#[derive(Debug, Clone)]
pub struct Detector {
    patterns: SignalPatterns,
}

impl Detector {
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: SignalPatterns::new()?,
        })
    }

    /// Classify a page. Pages without enough platform signals stop here
    /// with a not-a-store error and no feature data.
    pub fn analyze(&self, html: &str) -> ValidationResult {
        let platform = detect_platform(html, &self.patterns);

        debug!(
            "platform signals: {} {:?}",
            platform.signal_count, platform.evidence
        );

        if !platform.matched {
            return ValidationResult::failure(
                &ValidationError::NotPlatformMatch,
            );
        }

        let features = detect_features(html, &self.patterns);
        let score = architecture_score(html, &features, &self.patterns);
        let theme_architecture = classify_architecture(score);
        let app_heavy = is_app_heavy(html, &self.patterns);

        debug!(
            "features: {:?}, architecture score: {} ({})",
            features, score, theme_architecture
        );

        ValidationResult {
            is_platform_match: true,
            is_modern_architecture: is_modern_architecture(&features),
            theme_architecture,
            app_heavy,
            detected_features: features,
            platform_version: extract_platform_version(html, &self.patterns),
            error: None,
            warnings: collect_warnings(&features, app_heavy),
        }
    }
}
