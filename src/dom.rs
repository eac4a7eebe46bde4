//! DOM Operations Adapter
//!
//! Thin helpers over `dom_query` node handles. The engine walks the tree with
//! `NodeRef` (parent, children and sibling links) and only uses `Selection`
//! at its public boundary.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

use crate::tags::TagClass;

// === Tag/Node Information ===

/// Get tag name (lowercase) of an element node.
#[inline]
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<StrTendril> {
    if node.is_element() {
        node.node_name()
    } else {
        None
    }
}

/// Check whether an element's tag belongs to a tag class.
#[inline]
#[must_use]
pub fn is_tag_in(node: &NodeRef, class: TagClass) -> bool {
    tag_name(node).is_some_and(|tag| class.contains(&tag))
}

// === Attribute Operations ===

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(node: &NodeRef) -> Option<StrTendril> {
    node.attr("class")
}

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(node: &NodeRef) -> Option<StrTendril> {
    node.attr("id")
}

/// Get all attribute names of an element.
#[must_use]
pub fn attribute_names(node: &NodeRef) -> Vec<String> {
    node.attrs()
        .iter()
        .map(|attr| attr.name.local.to_string())
        .collect()
}

// === Tree Navigation ===

/// First node of a selection, if any.
#[inline]
#[must_use]
pub fn first_node<'a>(sel: &Selection<'a>) -> Option<NodeRef<'a>> {
    sel.nodes().first().copied()
}

/// Element ancestors of a node, nearest first (the document node excluded).
#[must_use]
pub fn element_ancestors<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut ancestors = Vec::new();
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.is_element() {
            ancestors.push(parent);
        }
        current = parent.parent();
    }
    ancestors
}

/// Element descendants of a node in document order.
#[must_use]
pub fn element_descendants<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.descendants()
        .into_iter()
        .filter(NodeRef::is_element)
        .collect()
}

/// First element descendant whose tag belongs to a tag class.
#[must_use]
pub fn find_descendant<'a>(node: &NodeRef<'a>, class: TagClass) -> Option<NodeRef<'a>> {
    node.descendants()
        .into_iter()
        .find(|d| is_tag_in(d, class))
}

// === Text Content ===

/// Check whether a string holds any non-whitespace character.
#[inline]
#[must_use]
pub fn has_text(s: &str) -> bool {
    s.chars().any(|c| !c.is_whitespace())
}

/// Get outer HTML of a node.
#[inline]
#[must_use]
pub fn outer_html(node: &NodeRef) -> StrTendril {
    node.html()
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_name_of_element_and_text() {
        let doc = parse(r#"<div id="main" class="container">content</div>"#);
        let div = first_node(&doc.select("div")).unwrap();
        let text = div.first_child().unwrap();

        assert_eq!(tag_name(&div).as_deref(), Some("div"));
        assert!(tag_name(&text).is_none());
        assert_eq!(id(&div).as_deref(), Some("main"));
        assert_eq!(class_name(&div).as_deref(), Some("container"));
    }

    #[test]
    fn test_missing_attributes_return_none() {
        let doc = parse(r#"<div>no attributes</div>"#);
        let div = first_node(&doc.select("div")).unwrap();

        assert!(id(&div).is_none());
        assert!(class_name(&div).is_none());
        assert!(attribute_names(&div).is_empty());
    }

    #[test]
    fn test_attribute_names() {
        let doc = parse(r##"<a href="http://example.com" class="link" title="Example">Link</a>"##);
        let a = first_node(&doc.select("a")).unwrap();

        let names = attribute_names(&a);
        assert_eq!(names.len(), 3);
        assert!(names.contains(&"href".to_string()));
        assert!(names.contains(&"class".to_string()));
        assert!(names.contains(&"title".to_string()));
    }

    #[test]
    fn test_is_tag_in() {
        let doc = parse(r#"<div><p>text</p><span>x</span></div>"#);
        let p = first_node(&doc.select("p")).unwrap();
        let span = first_node(&doc.select("span")).unwrap();

        assert!(is_tag_in(&p, TagClass::ContentText));
        assert!(!is_tag_in(&span, TagClass::ContentText));
    }

    #[test]
    fn test_element_ancestors_nearest_first() {
        let doc = parse(r#"<html><body><section><div><p id="t">x</p></div></section></body></html>"#);
        let p = first_node(&doc.select("#t")).unwrap();

        let names: Vec<String> = element_ancestors(&p)
            .iter()
            .filter_map(|n| tag_name(n).map(|t| t.to_string()))
            .collect();
        assert_eq!(names, vec!["div", "section", "body", "html"]);
    }

    #[test]
    fn test_element_descendants_skip_text() {
        let doc = parse(r#"<div id="root">a<b>b</b>c<i>d</i></div>"#);
        let root = first_node(&doc.select("#root")).unwrap();

        let descendants = element_descendants(&root);
        assert_eq!(descendants.len(), 2);
        let tags: Vec<String> = descendants.iter().filter_map(tag_name).map(|t| t.to_string()).collect();
        assert_eq!(tags, ["b", "i"]);
    }

    #[test]
    fn test_find_descendant() {
        let doc = parse(r#"<article><p>intro</p><h2>Second</h2><h1>First</h1></article>"#);
        let article = first_node(&doc.select("article")).unwrap();

        let heading = find_descendant(&article, TagClass::Heading).unwrap();
        assert_eq!(tag_name(&heading).as_deref(), Some("h2"));
        assert!(find_descendant(&article, TagClass::Removable).is_none());
    }

    #[test]
    fn test_has_text() {
        assert!(has_text(" a "));
        assert!(!has_text(" \n\t "));
        assert!(!has_text(""));
    }

    #[test]
    fn test_outer_html() {
        let doc = parse(r#"<div><span>nested</span></div>"#);
        let span = first_node(&doc.select("span")).unwrap();

        assert_eq!(&*outer_html(&span), "<span>nested</span>");
    }
}
