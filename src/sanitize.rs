//! Article sanitizing.
//!
//! Cleans the winning content node in place:
//!
//! 1. removes scripts, styles, forms and other non-content elements
//! 2. strips event handler, id, class, data and style attributes
//! 3. resolves link and media URLs against the page URL
//! 4. drops comments, whitespace-only text and elements left empty
//!
//! The root node itself is never removed.

use dom_query::NodeRef;

use crate::dom;
use crate::patterns::REMOVABLE_ATTRIBUTE;
use crate::tags::{self, TagClass};
use crate::url_utils::UrlResolver;

/// Sanitize `root` in place and return it.
pub fn sanitize<'a>(root: NodeRef<'a>, resolver: &UrlResolver) -> NodeRef<'a> {
    remove_elements(&root);
    strip_attributes(&root);
    resolve_urls(&root, resolver);
    prune_empty(&root);
    root
}

/// Remove descendants whose tag is in [`TagClass::Removable`].
///
/// Works bottom-up so that a node is always detached before its ancestor.
fn remove_elements(root: &NodeRef) {
    let doomed: Vec<NodeRef> = dom::element_descendants(root)
        .into_iter()
        .filter(|n| dom::is_tag_in(n, TagClass::Removable))
        .collect();

    for node in doomed.iter().rev() {
        node.remove_from_parent();
    }
}

/// Strip attributes matching [`REMOVABLE_ATTRIBUTE`] from `root` and every
/// element below it.
fn strip_attributes(root: &NodeRef) {
    let mut elements = vec![*root];
    elements.extend(dom::element_descendants(root));

    for el in &elements {
        for name in dom::attribute_names(el) {
            if REMOVABLE_ATTRIBUTE.is_match(&name) {
                el.remove_attr(&name);
            }
        }
    }
}

/// Rewrite URL-bearing attributes through `resolver`.
fn resolve_urls(root: &NodeRef, resolver: &UrlResolver) {
    let mut elements = vec![*root];
    elements.extend(dom::element_descendants(root));

    for el in &elements {
        let Some(tag) = dom::tag_name(el) else {
            continue;
        };
        for attr in tags::url_attributes(&tag) {
            if let Some(value) = el.attr(attr) {
                let resolved = resolver.resolve(&value);
                if resolved != *value {
                    el.set_attr(attr, &resolved);
                }
            }
        }
    }
}

/// Drop comments, whitespace-only text and elements left without children.
///
/// Children are handled before their parent so that emptied containers
/// cascade upward.
fn prune_empty(node: &NodeRef) {
    for child in node.children().iter().rev() {
        if child.is_comment() {
            child.remove_from_parent();
        } else if child.is_text() {
            if !dom::has_text(&child.text()) {
                child.remove_from_parent();
            }
        } else if child.is_element() {
            prune_empty(child);
            if child.first_child().is_none() && !dom::is_tag_in(child, TagClass::KeepEmpty) {
                child.remove_from_parent();
            }
        }
    }
}
