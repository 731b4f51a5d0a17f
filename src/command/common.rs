//! Report rendering shared between commands
use serde::Serialize;

use crate::{detection::types::ValidationResult, result::Result};

/// A validation result labelled with what was validated
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub target: &'a str,
    #[serde(flatten)]
    pub result: &'a ValidationResult,
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// Human readable report for one result.
pub fn render_text(report: &Report) -> String {
    let result = report.result;

    if let Some(error) = &result.error {
        return format!("{}: {}\n", report.target, error);
    }

    let features = &result.detected_features;
    let found: Vec<&str> = [
        (features.section_schemas, "section schemas"),
        (features.json_templates, "json templates"),
        (features.css_utility_patterns, "css utility patterns"),
        (features.accessibility_attributes, "accessibility attributes"),
    ]
    .iter()
    .filter(|(present, _)| *present)
    .map(|(_, name)| *name)
    .collect();

    let mut lines = vec![
        format!("{}: Shopify store", report.target),
        format!(
            "  modern architecture: {}",
            yes_no(result.is_modern_architecture)
        ),
        format!("  theme architecture:  {}", result.theme_architecture),
        format!("  app heavy:           {}", yes_no(result.app_heavy)),
        format!(
            "  platform version:    {}",
            result.platform_version.as_deref().unwrap_or("unknown")
        ),
        format!(
            "  features:            {}",
            if found.is_empty() {
                "none".to_string()
            } else {
                found.join(", ")
            }
        ),
    ];

    if !result.warnings.is_empty() {
        lines.push("  warnings:".to_string());
        for warning in result.warnings.iter() {
            lines.push(format!("    - {warning}"));
        }
    }

    lines.join("\n") + "\n"
}

/// Print reports to stdout as text or pretty JSON.
pub fn print_reports(reports: &[Report], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }

    for report in reports.iter() {
        print!("{}", render_text(report));
    }

    Ok(())
}
