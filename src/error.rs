//! Error types for storefront validation.
//!
//! Every variant here is eventually folded into the `error` field of a
//! [`ValidationResult`](crate::detection::types::ValidationResult); none of
//! them escape [`UrlValidator::validate`](crate::validator::UrlValidator).

use reqwest::StatusCode;
use thiserror::Error;

/// Message reported when a page does not carry enough Shopify signals.
pub const NOT_PLATFORM_MESSAGE: &str = "Not a Shopify store";

/// Failure modes of a single validation.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid URL: {0}")]
    InvalidInput(#[from] url::ParseError),

    #[error("Failed to fetch URL: {reason}")]
    UnreachableTarget {
        /// HTTP status when the server answered, `None` for transport
        /// failures
        status: Option<u16>,
        reason: String,
    },

    #[error("{}", NOT_PLATFORM_MESSAGE)]
    NotPlatformMatch,
}

impl ValidationError {
    /// Create an unreachable-target error for a non-success HTTP status
    pub fn http_status(status: StatusCode) -> Self {
        Self::UnreachableTarget {
            status: Some(status.as_u16()),
            reason: format!("HTTP {}", status),
        }
    }

    /// Create an unreachable-target error for a transport-level failure
    pub fn network(reason: impl Into<String>) -> Self {
        Self::UnreachableTarget {
            status: None,
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for ValidationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_status()
            && let Some(status) = err.status()
        {
            return Self::http_status(status);
        }

        if err.is_timeout() {
            Self::network(format!("request timed out: {}", err))
        } else if err.is_connect() {
            Self::network(format!("connection failed: {}", err))
        } else {
            Self::network(err.to_string())
        }
    }
}
