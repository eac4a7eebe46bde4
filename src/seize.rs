//! The extraction session.
//!
//! [`Seize`] binds a document (or any subtree of it) to a set of options,
//! picks the best content candidate once and keeps the sanitized result for
//! the lifetime of the session.

use std::cell::OnceCell;
use std::collections::HashSet;

use dom_query::{Document, NodeRef, Selection};

use crate::candidate::{Candidate, RenderTarget};
use crate::dom;
use crate::error::{Error, Result};
use crate::options::{LogEvent, Options};
use crate::tags::TagClass;
use crate::text;
use crate::url_utils::{self, UrlResolver};
use crate::xpath::StructuralAddress;

/// Article extraction over one document.
///
/// Content selection runs once, during construction; every accessor reads
/// the memoized result.
///
/// # Example
///
/// ```rust
/// use seize::{dom, Options, Seize};
///
/// let doc = dom::parse(r#"<html><head><title>Hello</title></head><body>
///     <div><p>First paragraph of the article, long enough to be counted as text.</p>
///     <p>Second paragraph of the article, which also has plenty of words in it.</p></div>
/// </body></html>"#);
///
/// let seize = Seize::from_document(&doc, Options::default())?;
/// assert_eq!(seize.title(), "Hello");
/// assert!(seize.text().starts_with("First paragraph"));
/// # Ok::<(), seize::Error>(())
/// ```
pub struct Seize<'a> {
    root: NodeRef<'a>,
    options: Options,
    url: String,
    resolver: UrlResolver,
    result: OnceCell<Option<Candidate<'a>>>,
}

impl<'a> Seize<'a> {
    /// Start a session over the first node of `selection`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the selection is empty.
    pub fn new(selection: &Selection<'a>, options: Options) -> Result<Self> {
        let root = dom::first_node(selection)
            .ok_or_else(|| Error::InvalidArgument("Argument must be Document or Node".to_string()))?;

        let url = match options.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => url_utils::page_url(&Selection::from(root)),
        };
        let resolver = UrlResolver::new(&url);

        let seize = Self {
            root,
            options,
            url,
            resolver,
            result: OnceCell::new(),
        };

        if seize.is_logging() {
            let size = seize.options.min_image_size;
            seize.log(
                "url",
                format!("{} (min image {}x{})", seize.url, size.width, size.height),
            );
        }
        seize.content();

        Ok(seize)
    }

    /// Start a session over a whole document.
    ///
    /// # Errors
    ///
    /// Never fails for a parsed document; the signature matches [`Seize::new`].
    pub fn from_document(doc: &'a Document, options: Options) -> Result<Self> {
        Self::new(&Selection::from(doc.root()), options)
    }

    /// The sanitized article node, or `None` when no candidate qualified.
    pub fn content(&self) -> Option<NodeRef<'a>> {
        self.result
            .get_or_init(|| self.select_content())
            .as_ref()
            .map(Candidate::node)
    }

    /// The winning candidate, if any.
    pub fn result(&self) -> Option<&Candidate<'a>> {
        self.result.get_or_init(|| self.select_content()).as_ref()
    }

    /// Plain text of the article, or an empty string.
    #[must_use]
    pub fn text(&self) -> String {
        self.content().map(|node| text::render(&node)).unwrap_or_default()
    }

    /// Plain text of an arbitrary node or candidate.
    #[must_use]
    pub fn text_of<'c>(&self, target: impl Into<RenderTarget<'a, 'c>>) -> String
    where
        'a: 'c,
    {
        text::render(&target.into().node())
    }

    /// Outer HTML of the article, or an empty string.
    #[must_use]
    pub fn html(&self) -> String {
        self.content()
            .map(|node| dom::outer_html(&node).to_string())
            .unwrap_or_default()
    }

    /// Document title, else the first heading of the article, else empty.
    #[must_use]
    pub fn title(&self) -> String {
        let scope = Selection::from(self.root);
        if let Some(title) = dom::first_node(&scope.select("title")) {
            let title = title.text();
            let title = title.trim();
            if !title.is_empty() {
                return title.to_string();
            }
        }

        self.content()
            .and_then(|article| dom::find_descendant(&article, TagClass::Heading))
            .map(|heading| heading.text().trim().to_string())
            .unwrap_or_default()
    }

    /// Resolve `path` against the session's base URL.
    #[must_use]
    pub fn resolve_url(&self, path: &str) -> String {
        self.resolver.resolve(path)
    }

    /// The base URL in use (may be empty).
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    pub(crate) fn resolver(&self) -> &UrlResolver {
        &self.resolver
    }

    /// Report an event to the configured sink and to the `log` facade.
    pub fn log(&self, name: &'static str, payload: impl Into<String>) {
        let event = LogEvent {
            name,
            payload: payload.into(),
        };
        log::debug!("{}: {}", event.name, event.payload);
        if let Some(sink) = &self.options.log {
            sink(&event);
        }
    }

    fn is_logging(&self) -> bool {
        self.options.log.is_some() || log::log_enabled!(log::Level::Debug)
    }

    /// Score every distinct content root and sanitize the best one.
    fn select_content(&self) -> Option<Candidate<'a>> {
        let heuristics = &self.options.heuristics;
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for el in dom::element_descendants(&self.root) {
            if !dom::is_tag_in(&el, TagClass::ContentText) {
                continue;
            }
            let Some(parent) = el.parent().filter(NodeRef::is_element) else {
                continue;
            };
            let address = StructuralAddress::of(&parent);
            if seen.insert(address.clone()) {
                candidates.push(Candidate::build(parent, address, heuristics, &self.resolver));
            }
        }

        let logging = self.is_logging();
        if logging {
            self.log("candidates", candidates.len().to_string());
            for c in &candidates {
                self.log(
                    "candidate",
                    format!(
                        "{} total={} pass={}",
                        c.address(),
                        c.total_score(),
                        c.is_match_requirements()
                    ),
                );
            }
        }

        candidates.retain(Candidate::is_match_requirements);
        candidates.sort_by(|a, b| a.total_score().total_cmp(&b.total_score()));

        let Some(winner) = candidates.pop() else {
            if logging {
                self.log("empty", "no candidate passed the requirements");
            }
            return None;
        };

        let article = winner.prepare_content();
        if logging {
            self.log("xpath", winner.address().to_string());
            self.log("article", dom::outer_html(&article).to_string());
        }

        Some(winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    const PARA: &str = "A paragraph of article text that is long enough to be scored on its own merits.";

    fn article_page(title: &str) -> String {
        format!(
            r#"<html><head><title>{title}</title></head><body>
            <div class="menu"><a href="/">Home</a></div>
            <div class="post"><h1>Heading</h1><p>{PARA}</p><p>{PARA}</p></div>
            </body></html>"#
        )
    }

    #[test]
    fn test_empty_selection_is_invalid_argument() {
        let doc = Document::from("<html><body></body></html>");
        let err = Seize::new(&doc.select("article"), Options::default()).err();

        assert!(matches!(
            err,
            Some(Error::InvalidArgument(ref m)) if m == "Argument must be Document or Node"
        ));
    }

    #[test]
    fn test_selects_article() {
        let doc = Document::from(article_page("T").as_str());
        let seize = Seize::from_document(&doc, Options::default()).unwrap();

        let result = seize.result().unwrap();
        assert_eq!(result.address().to_string(), "/html/body/div[2]");
        assert_eq!(seize.text(), format!("Heading\n\n{PARA}\n\n{PARA}"));
        assert!(seize.html().starts_with("<div><h1>Heading</h1>"));
    }

    #[test]
    fn test_no_candidate() {
        let doc = Document::from("<html><body><div><p>Too short.</p></div></body></html>");
        let seize = Seize::from_document(&doc, Options::default()).unwrap();

        assert!(seize.content().is_none());
        assert!(seize.result().is_none());
        assert_eq!(seize.text(), "");
        assert_eq!(seize.html(), "");
    }

    #[test]
    fn test_url_from_option_then_document() {
        let html = r#"<html><head><link rel="canonical" href="http://example.com/a/"></head><body></body></html>"#;
        let doc = Document::from(html);

        let auto = Seize::from_document(&doc, Options::default()).unwrap();
        assert_eq!(auto.url(), "http://example.com/a/");
        assert_eq!(auto.resolve_url("b.png"), "http://example.com/a/b.png");

        let explicit = Seize::from_document(
            &doc,
            Options {
                url: Some("http://other.com/".to_string()),
                ..Options::default()
            },
        )
        .unwrap();
        assert_eq!(explicit.url(), "http://other.com/");
    }

    #[test]
    fn test_title_fallback_to_heading() {
        let doc = Document::from(article_page("  ").as_str());
        let seize = Seize::from_document(&doc, Options::default()).unwrap();

        assert_eq!(seize.title(), "Heading");
    }

    #[test]
    fn test_text_of_node_and_candidate() {
        let doc = Document::from(article_page("T").as_str());
        let seize = Seize::from_document(&doc, Options::default()).unwrap();

        let menu = dom::first_node(&doc.select("a")).unwrap();
        assert_eq!(seize.text_of(menu), "Home");

        let winner = seize.result().unwrap();
        assert_eq!(seize.text_of(winner), seize.text());
    }

    #[test]
    fn test_log_events() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let options = Options {
            log: Some(Arc::new(move |e: &LogEvent| sink.lock().unwrap().push(e.name))),
            ..Options::default()
        };

        let doc = Document::from(article_page("T").as_str());
        let _seize = Seize::from_document(&doc, options).unwrap();

        let names = events.lock().unwrap().clone();
        assert_eq!(names.first(), Some(&"url"));
        assert!(names.contains(&"candidates"));
        assert!(names.contains(&"candidate"));
        assert_eq!(&names[names.len() - 2..], &["xpath", "article"]);
    }
}
