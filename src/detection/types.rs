use serde::Serialize;
use std::fmt;

use crate::error::ValidationError;

/// Outcome of the platform probe vote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDetection {
    /// Whether enough probes hit to call the page a Shopify store
    pub matched: bool,
    /// Number of probes that hit
    pub signal_count: usize,
    /// Names of the probes that hit, in probe order
    pub evidence: Vec<&'static str>,
}

/// Independent feature flags read from theme markup
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedFeatures {
    pub section_schemas: bool,
    pub json_templates: bool,
    pub css_utility_patterns: bool,
    pub accessibility_attributes: bool,
}

/// Heuristic resemblance band for a theme.
///
/// The markup can only show what a theme looks like: forks and rebrands of
/// the reference theme are common, so no band claims a specific base theme.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeArchitecture {
    /// Looks like a conventional, reference-style section theme
    ConventionalLike,
    /// Some modern theme conventions, but not enough to look conventional
    Custom,
    #[default]
    Unknown,
}

impl ThemeArchitecture {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeArchitecture::ConventionalLike => "conventional-like",
            ThemeArchitecture::Custom => "custom",
            ThemeArchitecture::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ThemeArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of validating a single storefront URL.
///
/// Built once per call and never updated. When `error` is set every flag is
/// false, the architecture is [`ThemeArchitecture::Unknown`] and there are no
/// warnings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_platform_match: bool,
    /// Sections and JSON templates are both present
    pub is_modern_architecture: bool,
    pub theme_architecture: ThemeArchitecture,
    pub app_heavy: bool,
    pub detected_features: DetectedFeatures,
    /// Theme schema version, when the page exposes one
    pub platform_version: Option<String>,
    pub error: Option<String>,
    /// Advisory notes in detection order
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Result for a validation that stopped at `err`
    pub fn failure(err: &ValidationError) -> Self {
        Self {
            error: Some(err.to_string()),
            ..Default::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
