//! # seize
//!
//! Heuristic extraction of the main article from a parsed HTML document.
//!
//! The engine scores every element that directly holds paragraphs, headings,
//! lists and similar text tags, keeps the best one, strips it of scripts,
//! forms, styling attributes and empty leftovers, and resolves its links
//! against the page URL.
//!
//! ## Quick Start
//!
//! ```rust
//! use seize::extract;
//!
//! let html = r#"<html><head><title>My Article</title></head><body>
//!   <nav><a href="/">Home</a></nav>
//!   <div class="content">
//!     <p>The first paragraph has enough words in it to count as article text.</p>
//!     <p>The second one, with a <a href="/more">relative link</a>, does too.</p>
//!   </div>
//! </body></html>"#;
//!
//! let result = extract(html)?;
//! assert_eq!(result.title, "My Article");
//! assert!(result.content_text.starts_with("The first paragraph"));
//! # Ok::<(), seize::Error>(())
//! ```
//!
//! ## Working on a parsed document
//!
//! [`Seize`] keeps the document borrowed and exposes the winning
//! [`Candidate`] with all of its scores:
//!
//! ```rust
//! use seize::{dom, Options, Seize};
//!
//! let doc = dom::parse("<html><body><div><p>Short.</p></div></body></html>");
//! let seize = Seize::from_document(&doc, Options::default())?;
//! assert!(seize.result().is_none());
//! # Ok::<(), seize::Error>(())
//! ```

mod error;
mod options;
mod patterns;
mod result;

/// DOM helpers over `dom_query` node handles.
pub mod dom;

/// Tag classes used by scoring, sanitizing and rendering.
pub mod tags;

/// Tunable scoring tables.
pub mod heuristics;

/// Structural addresses and their scores.
pub mod xpath;

/// Boost/demote classification of containers.
pub mod classifier;

/// Plain-text rendering.
pub mod text;

/// URL resolution and page URL discovery.
pub mod url_utils;

/// In-place cleanup of the selected article.
pub mod sanitize;

/// Scored content root candidates.
pub mod candidate;

/// Extraction session.
pub mod seize;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use candidate::{Candidate, RenderTarget};
pub use error::{Error, Result};
pub use heuristics::Heuristics;
pub use options::{ImageSize, LogEvent, LogSink, Options};
pub use result::ExtractResult;
pub use seize::Seize;
pub use xpath::{score_address, AddressScore, StructuralAddress};

/// Extracts the main article from an HTML string using default options.
///
/// Finding no article is not an error: the result then has empty text and
/// no HTML.
///
/// # Example
///
/// ```rust
/// use seize::extract;
///
/// let result = extract("<html><body><p>Too short</p></body></html>")?;
/// assert!(!result.has_content());
/// # Ok::<(), seize::Error>(())
/// ```
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts the main article from an HTML string with custom options.
///
/// # Example
///
/// ```rust
/// use seize::{extract_with_options, Options};
///
/// let options = Options {
///     url: Some("http://example.com/news/".to_string()),
///     ..Options::default()
/// };
/// let result = extract_with_options("<html><body></body></html>", &options)?;
/// assert_eq!(result.url, "http://example.com/news/");
/// # Ok::<(), seize::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    let doc = dom::parse(html);
    let seize = Seize::from_document(&doc, options.clone())?;
    Ok(ExtractResult::from(&seize))
}

/// Extracts the main article from HTML bytes with encoding detection.
///
/// The encoding is taken from a byte order mark, `<meta charset>` or
/// `<meta http-equiv="Content-Type">`, and defaults to UTF-8. Invalid
/// sequences are replaced with U+FFFD.
pub fn extract_bytes(html: &[u8]) -> Result<ExtractResult> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts the main article from HTML bytes with custom options.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractResult> {
    let html = encoding::transcode_to_utf8(html);
    extract_with_options(&html, options)
}
