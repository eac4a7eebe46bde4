//! Compiled regex patterns for container classification and cleanup.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! [`crate::Heuristics::default`] clones the keyword patterns, so callers
//! can swap them out without touching these statics.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Container Classification Patterns
// =============================================================================

/// Matches class/id names of containers likely to hold the article body.
pub static CONTAINER_BOOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)article|body|content|page|post|text|main|entry").expect("CONTAINER_BOOST regex")
});

/// Matches class/id names of page chrome: navigation, widgets, comments, ads.
///
/// "ad" only matches as a whole dash/underscore-separated token so that
/// "header" or "download" are left alone.
pub static CONTAINER_DEMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)counter|image|breadcrumb|combx|comment|contact|disqus|foot|footnote|link|media|meta|mod-conversations|promo|related|scroll|share|shoutbox|sidebar|social|sponsor|tags|toolbox|widget|about|\bnav\b|navbar|navigation|menu|banner|advert|(?:^|[-_\s])ads?(?:$|[-_\s])",
    )
    .expect("CONTAINER_DEMOTE regex")
});

/// Matches schema.org comment item types (`Comment`, `UserComments`).
pub static COMMENT_ITEMTYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)schema\.org/(?:Comment|UserComments)\b").expect("COMMENT_ITEMTYPE regex")
});

/// Matches the schema.org `NewsArticle` item type.
pub static NEWS_ARTICLE_ITEMTYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:www\.)?schema\.org/NewsArticle$").expect("NEWS_ARTICLE_ITEMTYPE regex")
});

// =============================================================================
// Sanitizing Patterns
// =============================================================================

/// Matches attribute names stripped from the article: event handlers,
/// ids, classes, data attributes and inline styles.
pub static REMOVABLE_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^on|^id$|^class|^data-|^style").expect("REMOVABLE_ATTRIBUTE regex")
});

// =============================================================================
// Charset Patterns
// =============================================================================

/// Matches `<meta charset="...">`.
pub static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/]+)"#).expect("CHARSET_META regex")
});

/// Matches `<meta http-equiv="Content-Type" content="...; charset=...">`.
pub static CONTENT_TYPE_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#)
        .expect("CONTENT_TYPE_CHARSET regex")
});
