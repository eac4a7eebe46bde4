//! Plain-text rendering of a subtree.
//!
//! Text nodes are trimmed at both ends and otherwise kept as written, so
//! `<pre>` keeps its layout; block tags add a line break after their content
//! and paragraph tags add a blank line. Breaks are
//! never stacked: before a break is written the trailing newlines already in
//! the output are counted and only the missing ones are added.

use dom_query::NodeRef;

use crate::dom;
use crate::tags::TagClass;

const LINE_BREAK: usize = 1;
const PARAGRAPH_BREAK: usize = 2;

/// Render `node` and its descendants as plain text.
///
/// # Example
///
/// ```rust
/// use seize::{dom, text};
///
/// let doc = dom::parse("<div><p>A</p><p>B</p></div>");
/// let div = dom::first_node(&doc.select("div")).unwrap();
/// assert_eq!(text::render(&div), "A\n\nB");
/// ```
#[must_use]
pub fn render(node: &NodeRef) -> String {
    let mut out = String::new();
    render_into(node, &mut out);
    out.trim().to_string()
}

fn render_into(node: &NodeRef, out: &mut String) {
    if node.is_text() {
        let text = node.text();
        if dom::has_text(&text) {
            out.push_str(text.trim());
        }
        if node.next_sibling().is_some() && !out.is_empty() && !out.ends_with(char::is_whitespace) {
            out.push(' ');
        }
        return;
    }

    let tag = dom::tag_name(node);
    if tag.as_deref().is_some_and(|t| TagClass::RenderIgnore.contains(t)) {
        return;
    }

    let start = out.len();
    for child in node.children() {
        render_into(&child, out);
    }

    let Some(tag) = tag else {
        return;
    };

    if TagClass::ParagraphBreak.contains(&tag) && out.get(start..).is_some_and(dom::has_text) {
        push_break(out, PARAGRAPH_BREAK);
    } else if TagClass::LineBreak.contains(&tag) {
        push_break(out, LINE_BREAK);
    }
}

/// Top up the trailing newlines of `out` to `size`.
fn push_break(out: &mut String, size: usize) {
    let kept = out.trim_end_matches([' ', '\t']).len();
    out.truncate(kept);

    let trailing = trailing_newlines(out);
    if trailing >= size {
        return;
    }
    for _ in trailing..size {
        out.push('\n');
    }
}

fn trailing_newlines(s: &str) -> usize {
    s.chars().rev().take_while(|&c| c == '\n').count()
}
