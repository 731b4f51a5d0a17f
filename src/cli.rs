//! CLI argument parsing.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::{config::Config, result::Result};

/// Detect Shopify storefronts and classify their theme architecture.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, global = true)]
    /// Path to a config file. Defaults to ./storeprobe.toml when present.
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    /// User-Agent header for page requests. Overrides the config file.
    pub user_agent: Option<String>,

    #[arg(long, global = true)]
    /// Request timeout in seconds, 0 disables it. Overrides the config file.
    pub timeout_secs: Option<u64>,

    #[arg(long, default_value_t = false, global = true)]
    /// Print results as JSON.
    pub json: bool,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Detection subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch one or more storefront URLs and classify each.
    Check {
        /// Absolute URLs to validate.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Classify a saved HTML page without fetching anything.
    Inspect {
        /// Path to the HTML file.
        file: PathBuf,
    },
}

impl Args {
    /// Load the config file and apply command line overrides.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        if let Some(user_agent) = &self.user_agent {
            config.fetch.user_agent = user_agent.clone();
        }

        if let Some(timeout_secs) = self.timeout_secs {
            config.fetch.timeout_secs = timeout_secs;
        }

        Ok(config)
    }
}
