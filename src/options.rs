//! Configuration options for content extraction.
//!
//! The `Options` struct carries the base URL used for link resolution, an
//! optional event sink and the scoring tables.

use std::fmt;
use std::sync::Arc;

use crate::heuristics::Heuristics;

/// A milestone reported to [`Options::log`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    /// Event name, e.g. `"url"`, `"candidate"`, `"article"`.
    pub name: &'static str,
    /// Free-form payload for the event.
    pub payload: String,
}

/// Callback receiving extraction events.
pub type LogSink = Arc<dyn Fn(&LogEvent) + Send + Sync>;

/// Minimum image dimensions.
///
/// Carried for callers that post-filter images; scoring does not use it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageSize {
    /// Minimum width in pixels.
    pub width: u32,
    /// Minimum height in pixels.
    pub height: u32,
}

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use seize::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     url: Some("http://example.com/news/".to_string()),
///     log: Some(Arc::new(|event| eprintln!("{}: {}", event.name, event.payload))),
///     ..Options::default()
/// };
/// ```
#[derive(Clone, Default)]
pub struct Options {
    /// Base URL for resolving relative links in the article.
    ///
    /// When `None` or empty, the URL is taken from `<link rel="canonical">`
    /// or `<meta property="og:url">`. Without any of these, links are left
    /// as they are.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Event sink invoked at extraction milestones.
    ///
    /// Has no effect on the extraction result.
    ///
    /// Default: `None`
    pub log: Option<LogSink>,

    /// Minimum image size.
    ///
    /// Default: `0x0`
    pub min_image_size: ImageSize,

    /// Scoring tables used to rank candidates.
    ///
    /// Default: `Heuristics::default()`
    pub heuristics: Heuristics,
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("url", &self.url)
            .field("log", &self.log.as_ref().map(|_| "<sink>"))
            .field("min_image_size", &self.min_image_size)
            .field("heuristics", &self.heuristics)
            .finish()
    }
}
