//! Configuration loading and parsing for `storeprobe.toml` files.
use color_eyre::eyre::{Context, eyre};
use log::*;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::result::Result;

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "storeprobe.toml";

/// Desktop browser user agent. Many storefronts block or serve different
/// markup to default HTTP client agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// HTTP fetch settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)] // Use default for missing fields
pub struct FetchConfig {
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout in seconds, 0 disables the timeout (default: 10)
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Root configuration structure for `storeprobe.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page fetch settings.
    pub fetch: FetchConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] in
    /// the working directory is used when present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => {
                if !path.is_file() {
                    return Err(eyre!(
                        "config file not found: {}",
                        path.display()
                    ));
                }
                path.to_path_buf()
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default_path.is_file() {
                    debug!("no {DEFAULT_CONFIG_FILE} found: using defaults");
                    return Ok(Self::default());
                }
                default_path
            }
        };

        info!("loading config from {}", path.display());

        let content = fs::read_to_string(&path).wrap_err_with(|| {
            format!("failed to read config file: {}", path.display())
        })?;

        Self::parse(&content).wrap_err_with(|| {
            format!("failed to parse config file: {}", path.display())
        })
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn loads_defaults() {
        let config = Config::default();
        assert_eq!(config.fetch.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.fetch.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.fetch.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn parses_partial_config() {
        let config = Config::parse(
            r#"
[fetch]
timeout_secs = 30
"#,
        )
        .unwrap();

        assert_eq!(config.fetch.timeout_secs, 30);
        assert_eq!(config.fetch.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn parses_empty_config() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn rejects_invalid_config() {
        assert!(Config::parse("[fetch]\ntimeout_secs = \"soon\"").is_err());
    }

    #[test]
    fn loads_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(
            &path,
            r#"
[fetch]
user_agent = "storeprobe-test"
timeout_secs = 0
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.fetch.user_agent, "storeprobe-test");
        assert_eq!(config.fetch.timeout_secs, 0);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }
}
