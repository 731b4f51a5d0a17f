//! Application-level result type for storeprobe.
//!
//! Domain failures of a single validation are modelled by
//! [`ValidationError`](crate::error::ValidationError) and always end up inside
//! a [`ValidationResult`](crate::detection::types::ValidationResult). Everything
//! else that can go wrong while wiring the tool together (reading the config
//! file, building the HTTP client, compiling detection patterns, installing the
//! logger) uses the `color-eyre` based alias defined here so errors reach
//! `main` with context attached.
//!
//! # Usage
//!
//! ```rust,ignore
//! use color_eyre::eyre::Context;
//! use crate::result::Result;
//!
//! fn read_page(path: &Path) -> Result<String> {
//!     let html = std::fs::read_to_string(path)
//!         .wrap_err_with(|| format!("failed to read {}", path.display()))?;
//!     Ok(html)
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used for application wiring.
///
/// Alias for `color_eyre::eyre::Result<T>`; use `.wrap_err()` to add context
/// as errors propagate.
pub type Result<T> = EyreResult<T>;
