//! Structural addresses.
//!
//! A structural address is the path of `(tag, same-tag sibling index)` pairs
//! from the document root down to an element, written XPath-style:
//! `/html/body/div[2]/article`. Indices of 1 are omitted when written.
//!
//! The address doubles as a positional fingerprint (candidates are deduplicated
//! by it) and as a source of two coarse scores, see [`AddressScore`].

use std::fmt;
use std::str::FromStr;

use dom_query::NodeRef;

use crate::error::{Error, Result};

/// One step of a structural address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressSegment {
    /// Lowercase tag name.
    pub tag: String,
    /// 1-based position among preceding element siblings with the same tag.
    pub index: usize,
}

/// Path of segments from the document root to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StructuralAddress {
    segments: Vec<AddressSegment>,
}

/// Coarse positional scores derived from an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressScore {
    /// Number of segments.
    pub depth: usize,
    /// Sum of sibling indices greater than one, or 1 when there are none.
    pub distance: usize,
}

impl StructuralAddress {
    /// Compute the address of `node`.
    ///
    /// Walks up through element ancestors; a non-element node yields the
    /// empty address.
    #[must_use]
    pub fn of(node: &NodeRef) -> Self {
        let mut segments = Vec::new();
        let mut current = Some(*node);

        while let Some(el) = current {
            if !el.is_element() {
                break;
            }
            let Some(tag) = el.node_name() else {
                break;
            };
            segments.push(AddressSegment {
                index: 1 + preceding_same_tag_siblings(&el, &tag),
                tag: tag.to_string(),
            });
            current = el.parent();
        }

        segments.reverse();
        Self { segments }
    }

    /// Segments ordered root-to-node.
    #[must_use]
    pub fn segments(&self) -> &[AddressSegment] {
        &self.segments
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Depth and distance of this address.
    #[must_use]
    pub fn score(&self) -> AddressScore {
        let distance: usize = self
            .segments
            .iter()
            .map(|s| s.index)
            .filter(|&i| i > 1)
            .sum();

        AddressScore {
            depth: self.segments.len(),
            distance: if distance == 0 { 1 } else { distance },
        }
    }
}

fn preceding_same_tag_siblings(node: &NodeRef, tag: &str) -> usize {
    let mut count = 0;
    let mut sibling = node.prev_sibling();
    while let Some(s) = sibling {
        if s.is_element() && s.node_name().is_some_and(|name| &*name == tag) {
            count += 1;
        }
        sibling = s.prev_sibling();
    }
    count
}

impl fmt::Display for StructuralAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment.tag)?;
            if segment.index > 1 {
                write!(f, "[{}]", segment.index)?;
            }
        }
        Ok(())
    }
}

impl FromStr for StructuralAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidAddress(s.to_string());

        let rest = s.strip_prefix('/').ok_or_else(invalid)?;
        let mut segments = Vec::new();

        for step in rest.split('/') {
            let (tag, index) = match step.split_once('[') {
                Some((tag, idx)) => {
                    let idx = idx.strip_suffix(']').ok_or_else(invalid)?;
                    let index: usize = idx.parse().map_err(|_| invalid())?;
                    (tag, index)
                }
                None => (step, 1),
            };

            if tag.is_empty()
                || index == 0
                || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':')
            {
                return Err(invalid());
            }

            segments.push(AddressSegment {
                tag: tag.to_ascii_lowercase(),
                index,
            });
        }

        Ok(Self { segments })
    }
}

/// Score an address written in `/tag[index]/...` form.
///
/// Returns `None` when the string is not a structural address.
///
/// # Example
///
/// ```rust
/// use seize::xpath::{score_address, AddressScore};
///
/// assert_eq!(
///     score_address("/html/body/div[11]/article[2]/div"),
///     Some(AddressScore { depth: 5, distance: 13 })
/// );
/// assert_eq!(score_address("not an address"), None);
/// ```
#[must_use]
pub fn score_address(address: &str) -> Option<AddressScore> {
    address
        .parse::<StructuralAddress>()
        .ok()
        .map(|a| a.score())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::{Document, Selection};

    fn first<'a>(sel: &Selection<'a>) -> NodeRef<'a> {
        *sel.nodes().first().unwrap()
    }

    #[test]
    fn test_address_of_first_siblings() {
        let doc = Document::from("<html><body><div><article><p>x</p></article></div></body></html>");
        let article = first(&doc.select("article"));

        let address = StructuralAddress::of(&article);
        assert_eq!(address.to_string(), "/html/body/div/article");
        assert_eq!(address.score(), AddressScore { depth: 4, distance: 1 });
    }

    #[test]
    fn test_address_counts_same_tag_siblings_only() {
        let doc = Document::from(
            "<html><body><p>a</p><div>1</div><span>s</span><div>2</div><div id=\"t\">3</div></body></html>",
        );
        let target = first(&doc.select("#t"));

        let address = StructuralAddress::of(&target);
        assert_eq!(address.to_string(), "/html/body/div[3]");
        assert_eq!(address.score(), AddressScore { depth: 3, distance: 3 });
    }

    #[test]
    fn test_address_of_non_element_is_empty() {
        let doc = Document::from("<p>text</p>");
        let text = first(&doc.select("p")).first_child().unwrap();

        assert!(StructuralAddress::of(&text).is_empty());
        assert!(StructuralAddress::of(&doc.root()).is_empty());
        assert_eq!(StructuralAddress::default().score(), AddressScore { depth: 0, distance: 1 });
    }

    #[test]
    fn test_score_address_strings() {
        assert_eq!(score_address("/html/body/div/article"), Some(AddressScore { depth: 4, distance: 1 }));
        assert_eq!(score_address("/html/body/div[11]/article"), Some(AddressScore { depth: 4, distance: 11 }));
        assert_eq!(
            score_address("/html/body/div[11]/article[2]/div"),
            Some(AddressScore { depth: 5, distance: 13 })
        );
        assert_eq!(score_address("/html"), Some(AddressScore { depth: 1, distance: 1 }));
    }

    #[test]
    fn test_score_address_rejects_malformed() {
        assert_eq!(score_address(""), None);
        assert_eq!(score_address("html/body"), None);
        assert_eq!(score_address("/html//body"), None);
        assert_eq!(score_address("/div[x]"), None);
        assert_eq!(score_address("/div[0]"), None);
        assert_eq!(score_address("/div[2"), None);
        assert!(matches!(
            "{}".parse::<StructuralAddress>(),
            Err(Error::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_display_round_trip() {
        let address: StructuralAddress = "/html/body/div[2]/article".parse().unwrap();
        assert_eq!(address.to_string(), "/html/body/div[2]/article");
        assert_eq!(address.segments()[2], AddressSegment { tag: "div".to_string(), index: 2 });
    }
}
