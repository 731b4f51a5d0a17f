//! Classifies a saved HTML page without touching the network
use color_eyre::eyre::Context;
use log::*;
use std::path::Path;
use tokio::fs;

use crate::{
    command::common::{Report, print_reports},
    detection::{manager::Detector, types::ValidationResult},
    result::Result,
};

pub async fn execute(file: &Path, json: bool) -> Result<()> {
    let result = inspect_file(file).await?;
    let target = file.display().to_string();

    print_reports(
        &[Report {
            target: &target,
            result: &result,
        }],
        json,
    )
}

/// Run detection over the HTML stored at `file`.
pub async fn inspect_file(file: &Path) -> Result<ValidationResult> {
    info!("inspecting {}", file.display());

    let bytes = fs::read(file)
        .await
        .wrap_err_with(|| format!("failed to read {}", file.display()))?;
    let html = String::from_utf8_lossy(&bytes);

    Ok(Detector::new()?.analyze(&html))
}
