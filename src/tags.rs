//! Tag classes used by scoring, sanitizing and text rendering.
//!
//! Every heuristic that looks at a tag name goes through [`TagClass`]. The
//! classes are closed tables (arrays for iteration, `HashSet`s for lookup),
//! so matching never needs a CSS selector engine.

use std::collections::HashSet;
use std::sync::LazyLock;

// === Tag Lists (arrays for iteration) ===

/// Tags that carry readable text. Their parents become candidate roots.
pub static CONTENT_TEXT_TAGS: [&str; 23] = [
    "p", "dl", "ul", "ol", "li", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "br", "figure",
    "blockquote", "b", "strong", "i", "em", "del", "time", "pre", "code",
];

/// Sectioning tags a candidate must not contain.
pub static DISALLOWED_CONTEXT_TAGS: [&str; 7] =
    ["footer", "header", "nav", "article", "section", "main", "form"];

/// Tags that disqualify every node below them.
pub static NON_CONTENT_ANCESTOR_TAGS: [&str; 14] = [
    "script", "dl", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "figure", "a", "blockquote",
    "form",
];

/// Tags that mark a primary content container.
pub static BOOST_TAGS: [&str; 1] = ["article"];

/// Tags that mark page chrome.
pub static DEMOTE_TAGS: [&str; 9] = ["footer", "aside", "header", "nav", "menu", "ul", "ol", "a", "p"];

/// Tags dropped (with their subtree) from the winning article.
pub static REMOVABLE_TAGS: [&str; 10] = [
    "style", "script", "form", "object", "embed", "link", "button", "input", "label", "noscript",
];

/// Tags that may legitimately stay empty after cleanup.
pub static KEEP_EMPTY_TAGS: [&str; 3] = ["br", "hr", "img"];

/// Tags followed by a single line break in rendered text.
pub static LINE_BREAK_TAGS: [&str; 8] = ["br", "hr", "li", "div", "tr", "dt", "dd", "img"];

/// Tags followed by a blank line in rendered text.
pub static PARAGRAPH_BREAK_TAGS: [&str; 16] = [
    "p", "dl", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "figure", "blockquote",
    "code", "pre", "table",
];

/// Tags skipped entirely when rendering text.
pub static RENDER_IGNORE_TAGS: [&str; 1] = ["img"];

/// Heading tags: h1-h6
pub static HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

// === Tag Sets (HashSets for O(1) lookup) ===

static CONTENT_TEXT_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| CONTENT_TEXT_TAGS.into_iter().collect());

static DISALLOWED_CONTEXT_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DISALLOWED_CONTEXT_TAGS.into_iter().collect());

static NON_CONTENT_ANCESTOR_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NON_CONTENT_ANCESTOR_TAGS.into_iter().collect());

static DEMOTE_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DEMOTE_TAGS.into_iter().collect());

static REMOVABLE_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| REMOVABLE_TAGS.into_iter().collect());

static LINE_BREAK_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| LINE_BREAK_TAGS.into_iter().collect());

static PARAGRAPH_BREAK_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PARAGRAPH_BREAK_TAGS.into_iter().collect());

/// A closed set of tag names with a fixed heuristic role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagClass {
    /// Readable text tags; their parents are candidate roots.
    ContentText,
    /// Sectioning tags a candidate must not contain.
    DisallowedContext,
    /// Tags whose descendants can never be a content root.
    NonContentAncestor,
    /// Primary content containers.
    Boost,
    /// Page chrome containers.
    Demote,
    /// Tags removed from the article during sanitizing.
    Removable,
    /// Tags kept even when empty.
    KeepEmpty,
    /// Tags followed by one newline when rendered.
    LineBreak,
    /// Tags followed by a blank line when rendered.
    ParagraphBreak,
    /// Tags not rendered at all.
    RenderIgnore,
    /// h1-h6
    Heading,
}

impl TagClass {
    /// Tag names belonging to this class.
    #[must_use]
    pub fn members(self) -> &'static [&'static str] {
        match self {
            Self::ContentText => &CONTENT_TEXT_TAGS,
            Self::DisallowedContext => &DISALLOWED_CONTEXT_TAGS,
            Self::NonContentAncestor => &NON_CONTENT_ANCESTOR_TAGS,
            Self::Boost => &BOOST_TAGS,
            Self::Demote => &DEMOTE_TAGS,
            Self::Removable => &REMOVABLE_TAGS,
            Self::KeepEmpty => &KEEP_EMPTY_TAGS,
            Self::LineBreak => &LINE_BREAK_TAGS,
            Self::ParagraphBreak => &PARAGRAPH_BREAK_TAGS,
            Self::RenderIgnore => &RENDER_IGNORE_TAGS,
            Self::Heading => &HEADING_TAGS,
        }
    }

    /// Whether `tag` (lowercase local name) belongs to this class.
    #[must_use]
    pub fn contains(self, tag: &str) -> bool {
        match self {
            Self::ContentText => CONTENT_TEXT_TAG_SET.contains(tag),
            Self::DisallowedContext => DISALLOWED_CONTEXT_TAG_SET.contains(tag),
            Self::NonContentAncestor => NON_CONTENT_ANCESTOR_TAG_SET.contains(tag),
            Self::Demote => DEMOTE_TAG_SET.contains(tag),
            Self::Removable => REMOVABLE_TAG_SET.contains(tag),
            Self::LineBreak => LINE_BREAK_TAG_SET.contains(tag),
            Self::ParagraphBreak => PARAGRAPH_BREAK_TAG_SET.contains(tag),
            // Small lists, linear search is fine
            Self::Boost | Self::KeepEmpty | Self::RenderIgnore | Self::Heading => {
                self.members().contains(&tag)
            }
        }
    }
}

/// Attributes holding a URL for the given tag, resolved during sanitizing.
#[must_use]
pub fn url_attributes(tag: &str) -> &'static [&'static str] {
    match tag {
        "a" | "area" => &["href"],
        "img" => &["src", "usemap", "longdesc"],
        "iframe" | "source" => &["src"],
        "del" | "ins" | "blockquote" | "q" => &["cite"],
        "video" => &["src", "poster"],
        _ => &[],
    }
}
