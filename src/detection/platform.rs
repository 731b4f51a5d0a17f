//! Shopify platform vote.
//!
//! Each probe is an independent fingerprint. A page is only called a Shopify
//! store when at least [`PLATFORM_SIGNAL_THRESHOLD`] probes agree, which keeps
//! pages that merely mention the name out.

use crate::detection::{
    patterns::{
        CDN_HOST, PLATFORM_SIGNAL_THRESHOLD, SignalPatterns, THEME_GLOBAL,
    },
    types::PlatformDetection,
};

/// Run every platform probe against `html` and count the hits
pub fn detect_platform(
    html: &str,
    patterns: &SignalPatterns,
) -> PlatformDetection {
    let probes = [
        ("cdn host", html.contains(CDN_HOST)),
        ("theme global", html.contains(THEME_GLOBAL)),
        ("shopify global", patterns.shopify_global.is_match(html)),
        ("section comment", patterns.section_comment.is_match(html)),
        ("keyword", patterns.keyword.is_match(html)),
    ];

    let evidence: Vec<&'static str> = probes
        .iter()
        .filter(|(_, hit)| *hit)
        .map(|(name, _)| *name)
        .collect();

    let signal_count = evidence.len();

    PlatformDetection {
        matched: signal_count >= PLATFORM_SIGNAL_THRESHOLD,
        signal_count,
        evidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> SignalPatterns {
        SignalPatterns::new().unwrap()
    }

    #[test]
    fn no_signals_is_not_a_match() {
        let detection =
            detect_platform("<html><body>Hello</body></html>", &patterns());

        assert!(!detection.matched);
        assert_eq!(detection.signal_count, 0);
        assert!(detection.evidence.is_empty());
    }

    // The threshold of 2 is a tuning choice: a page that only mentions the
    // name must stay below it.
    #[test]
    fn bare_keyword_is_not_a_match() {
        let detection = detect_platform(
            "<p>We migrated away from shopify last year.</p>",
            &patterns(),
        );

        assert!(!detection.matched);
        assert_eq!(detection.signal_count, 1);
        assert_eq!(detection.evidence, vec!["keyword"]);
    }

    #[test]
    fn cdn_host_with_keyword_is_a_match() {
        let detection = detect_platform(
            r#"<img src="https://cdn.shopify.com/s/files/1/logo.png">"#,
            &patterns(),
        );

        assert!(detection.matched);
        assert_eq!(detection.evidence, vec!["cdn host", "keyword"]);
    }

    #[test]
    fn section_comment_alone_needs_corroboration() {
        let detection = detect_platform(
            "<!-- BEGIN sections: header-group --><header></header>",
            &patterns(),
        );

        assert!(!detection.matched);
        assert_eq!(detection.evidence, vec!["section comment"]);
    }

    #[test]
    fn counts_every_probe() {
        let html = r#"
            <!-- BEGIN app block: reviews -->
            <script src="//cdn.shopify.com/shopifycloud/boomerang.js"></script>
            <script>
              window.Shopify = window.Shopify || {};
              Shopify.theme = {"name":"Dawn"};
            </script>
        "#;

        let detection = detect_platform(html, &patterns());

        assert!(detection.matched);
        assert_eq!(detection.signal_count, 5);
        assert_eq!(
            detection.evidence,
            vec![
                "cdn host",
                "theme global",
                "shopify global",
                "section comment",
                "keyword"
            ]
        );
    }
}
