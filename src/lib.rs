pub mod cli;
pub mod command;
pub mod config;
pub mod detection;
pub mod error;
pub mod fetcher;
pub mod result;
pub mod validator;

pub use detection::{
    manager::Detector,
    types::{DetectedFeatures, ThemeArchitecture, ValidationResult},
};
pub use error::ValidationError;
pub use fetcher::{HttpFetcher, PageFetcher};
pub use validator::UrlValidator;

#[cfg(test)]
pub mod test_helpers;
