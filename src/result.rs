//! Result types for extraction output.
//!
//! [`ExtractResult`] is an owned snapshot of a [`crate::Seize`] session, free
//! of any borrow on the parsed document.

use serde::Serialize;

use crate::seize::Seize;

/// Result of content extraction from an HTML document.
///
/// `content_html` and `address` are `None` when no candidate qualified; the
/// text fields are then empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractResult {
    /// Base URL used to resolve links (may be empty).
    pub url: String,

    /// Page title, or the first heading of the article.
    pub title: String,

    /// Main content as plain text.
    pub content_text: String,

    /// Main content as sanitized HTML.
    pub content_html: Option<String>,

    /// Structural address of the article root, e.g. `/html/body/div[2]`.
    pub address: Option<String>,
}

impl ExtractResult {
    /// Whether an article was found.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.content_html.is_some()
    }
}

impl From<&Seize<'_>> for ExtractResult {
    fn from(seize: &Seize<'_>) -> Self {
        Self {
            url: seize.url().to_string(),
            title: seize.title(),
            content_text: seize.text(),
            content_html: seize.content().map(|_| seize.html()),
            address: seize.result().map(|c| c.address().to_string()),
        }
    }
}
