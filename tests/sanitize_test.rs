#![allow(clippy::unwrap_used)] // unwrap() is appropriate in tests for clear panic messages

use regex::Regex;
use seize::dom::{self, NodeRef, Selection};
use seize::tags::TagClass;
use seize::{Options, Seize};

const BODY: &str = "This paragraph is long enough to make its container the article root.";

fn messy_article() -> String {
    format!(
        r##"<html><head>
        <title>Messy</title>
        <link rel="canonical" href="http://example.com/2024/story.html">
        </head><body>
        <div id="main" class="story" data-track="1" style="margin:0" onclick="go()">
            <style>.x {{ color: red }}</style>
            <script>tracker();</script>
            <h2 class="headline">Headline</h2>
            <p id="p1">{BODY} <a href="next.html" onmouseover="x()">Next</a></p>
            <p>{BODY} <img src="/img/photo.jpg" data-src="lazy.jpg"></p>
            <p><span></span><b> </b></p>
            <blockquote cite="quotes/1">Quoted words from somewhere else entirely.</blockquote>
            <p><a href="#comments">Jump</a> <a href="javascript:void(0)">Share</a></p>
            <noscript>Enable JavaScript</noscript>
            <input type="text" name="q"><button>Search</button><label>Label</label>
            <object data="movie.swf"><embed src="movie.swf"></object>
            <video src="clip.mp4" poster="poster.jpg">video</video>
            <hr>
            <!-- end of story -->
        </div>
        </body></html>"##
    )
}

fn subtree(node: &NodeRef) -> Vec<String> {
    dom::element_descendants(node)
        .iter()
        .filter_map(|n| dom::tag_name(n).map(|t| t.to_string()))
        .collect()
}

#[test]
fn sanitized_article_has_no_removable_elements() {
    let doc = dom::parse(&messy_article());
    let seize = Seize::from_document(&doc, Options::default()).unwrap();
    let article = seize.content().unwrap();

    for tag in subtree(&article) {
        assert!(!TagClass::Removable.contains(&tag), "{tag} survived sanitizing");
    }
}

#[test]
fn sanitized_article_has_no_removable_attributes() {
    let removable = Regex::new(r"(?i)^on|^id$|^class|^data-|^style").unwrap();
    let doc = dom::parse(&messy_article());
    let seize = Seize::from_document(&doc, Options::default()).unwrap();
    let article = seize.content().unwrap();

    let mut elements = vec![article];
    elements.extend(dom::element_descendants(&article));
    for el in &elements {
        for name in dom::attribute_names(el) {
            assert!(!removable.is_match(&name), "attribute {name} survived sanitizing");
        }
    }
}

#[test]
fn sanitized_article_has_resolved_urls() {
    let doc = dom::parse(&messy_article());
    let seize = Seize::from_document(&doc, Options::default()).unwrap();
    assert_eq!(seize.url(), "http://example.com/2024/story.html");

    let article = Selection::from(seize.content().unwrap());
    let hrefs: Vec<String> = article
        .select("a")
        .nodes()
        .iter()
        .filter_map(|a| a.attr("href").map(|h| h.to_string()))
        .collect();
    assert_eq!(hrefs, vec!["http://example.com/2024/next.html", "#comments", ""]);

    assert_eq!(
        article.select("img").attr("src").as_deref(),
        Some("http://example.com/img/photo.jpg")
    );
    assert_eq!(
        article.select("blockquote").attr("cite").as_deref(),
        Some("http://example.com/2024/quotes/1")
    );
    assert_eq!(
        article.select("video").attr("poster").as_deref(),
        Some("http://example.com/2024/poster.jpg")
    );
}

#[test]
fn urls_are_left_alone_without_base() {
    let html = messy_article().replace(
        r#"<link rel="canonical" href="http://example.com/2024/story.html">"#,
        "",
    );
    let doc = dom::parse(&html);
    let seize = Seize::from_document(&doc, Options::default()).unwrap();
    assert_eq!(seize.url(), "");

    let article = Selection::from(seize.content().unwrap());
    assert_eq!(article.select("img").attr("src").as_deref(), Some("/img/photo.jpg"));
    assert!(article.select(r#"a[href="javascript:void(0)"]"#).exists());
}

#[test]
fn sanitized_article_has_no_empty_leaves() {
    let doc = dom::parse(&messy_article());
    let seize = Seize::from_document(&doc, Options::default()).unwrap();
    let article = seize.content().unwrap();

    for el in dom::element_descendants(&article) {
        if el.first_child().is_none() {
            assert!(
                dom::is_tag_in(&el, TagClass::KeepEmpty),
                "empty {:?} survived sanitizing",
                dom::tag_name(&el)
            );
        }
    }
    assert!(!seize.html().contains("<!--"));
}

#[test]
fn sanitized_article_keeps_its_text() {
    let doc = dom::parse(&messy_article());
    let seize = Seize::from_document(&doc, Options::default()).unwrap();

    let text = seize.text();
    assert!(text.starts_with("Headline\n\n"));
    assert!(text.contains("Quoted words"));
    assert!(!text.contains("tracker"));
    assert!(!text.contains("Enable JavaScript"));
    assert!(!text.contains("Search"));
}

#[test]
fn standalone_sanitize() {
    let doc = dom::parse(r#"<section class="x"><p style="a">Text</p><script>s()</script><p></p></section>"#);
    let section = dom::first_node(&doc.select("section")).unwrap();

    let resolver = seize::url_utils::UrlResolver::default();
    let cleaned = seize::sanitize::sanitize(section, &resolver);

    assert_eq!(&*dom::outer_html(&cleaned), "<section><p>Text</p></section>");
}
