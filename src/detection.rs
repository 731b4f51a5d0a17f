//! Shopify storefront detection over raw page HTML.
//!
//! Independent heuristic detectors (platform vote, feature flags,
//! architecture score, app signals, version and warnings) composed by
//! [`manager::Detector`].

pub mod advisory;
pub mod architecture;
pub mod features;
pub mod manager;
pub mod patterns;
pub mod platform;
pub mod types;
