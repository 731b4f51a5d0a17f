//! HTML fixtures shared across test modules.
//!
//! Fixtures are engineered so each added snippet hits exactly one signal;
//! keep them that way when editing.

/// Wraps `body` in a page carrying the CDN host and `Shopify.theme` global
/// (plus the keyword those imply) and no feature or architecture markers.
///
/// # Example
/// ```ignore
/// let html = shopify_page(r#"<div class="page-width"></div>"#);
/// ```
pub fn shopify_page(body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <link rel="stylesheet" href="https://cdn.shopify.com/s/files/1/0001/t/1/assets/base.css">
    <script>Shopify.theme = {{"name":"Dawn","id":1,"schema_name":"Dawn","schema_version":"15.0.0","role":"main"}};</script>
  </head>
  <body>{body}</body>
</html>"#
    )
}

/// Snippets that each add exactly one architecture signal to
/// [`shopify_page`]
const SINGLE_SIGNAL_SNIPPETS: [&str; 5] = [
    r#"<div class="page-width"></div>"#,
    r#"<div class="gradient"></div>"#,
    r#"<main data-template="section-template--main"></main>"#,
    r#"<div class="media-wrapper"></div>"#,
    r#"<div class="shopify-section"></div>"#,
];

/// A platform page scoring exactly `signals` architecture signals (max 5)
pub fn architecture_fixture(signals: usize) -> String {
    shopify_page(&SINGLE_SIGNAL_SNIPPETS[..signals].concat())
}

/// A modern storefront: every feature flag, six architecture signals and
/// three app vendors.
pub fn conventional_store_page() -> String {
    shopify_page(
        r#"
    <div id="shopify-section-header" class="shopify-section" data-section-id="header">
      <div class="page-width">
        <nav role="navigation" aria-label="Main menu"></nav>
        <div class="color-scheme-1 gradient"></div>
      </div>
    </div>
    <script type="application/json" id="cart-data">{"items":[]}</script>
    <script src="https://static.klaviyo.com/onsite/js/klaviyo.js"></script>
    <script src="https://cdn.judge.me/widget_preloader.js"></script>
    <script src="https://config.gorgias.chat/bundle-loader.js"></script>"#,
    )
}
