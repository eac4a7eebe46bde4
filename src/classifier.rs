//! Container classification.
//!
//! Decides whether an element looks like an article container (boost) or
//! like page chrome (demote) from its class and id strings, its tag and a few
//! schema.org markers. Both flags can be set at once.

use dom_query::NodeRef;

use crate::dom;
use crate::heuristics::Heuristics;
use crate::patterns::{COMMENT_ITEMTYPE, NEWS_ARTICLE_ITEMTYPE};
use crate::tags::TagClass;

/// Outcome of classifying one element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    /// Looks like a primary content container.
    pub boost: bool,
    /// Looks like navigation, comments or other boilerplate.
    pub demote: bool,
}

impl Classification {
    /// Signed score contribution for a candidate at `depth`.
    #[must_use]
    pub fn contribution(self, depth: usize, depth_factor: f64) -> f64 {
        let weight = depth as f64 * depth_factor;
        let mut score = 0.0;
        if self.boost {
            score += weight;
        }
        if self.demote {
            score -= weight;
        }
        score
    }
}

/// Classify an element. Non-element nodes are neither boosted nor demoted.
#[must_use]
pub fn classify(node: &NodeRef, heuristics: &Heuristics) -> Classification {
    if !node.is_element() {
        return Classification::default();
    }

    let class = dom::class_name(node).unwrap_or_default();
    let id = dom::id(node).unwrap_or_default();

    Classification {
        boost: heuristics.boost_pattern.is_match(&class)
            || heuristics.boost_pattern.is_match(&id)
            || has_article_role(node),
        demote: heuristics.demote_pattern.is_match(&class)
            || heuristics.demote_pattern.is_match(&id)
            || has_chrome_role(node),
    }
}

/// `<article>`, `itemprop="articleBody"` or a schema.org NewsArticle item.
fn has_article_role(node: &NodeRef) -> bool {
    dom::is_tag_in(node, TagClass::Boost)
        || node
            .attr("itemprop")
            .is_some_and(|v| v.split_whitespace().any(|p| p == "articleBody"))
        || node
            .attr("itemtype")
            .is_some_and(|v| NEWS_ARTICLE_ITEMTYPE.is_match(v.trim()))
}

/// Chrome tags and schema.org comment markers.
fn has_chrome_role(node: &NodeRef) -> bool {
    dom::is_tag_in(node, TagClass::Demote)
        || node
            .attr("itemprop")
            .is_some_and(|v| v.split_whitespace().any(|p| p == "comment"))
        || node
            .attr("itemtype")
            .is_some_and(|v| COMMENT_ITEMTYPE.is_match(&v))
}

/// Node score of a candidate.
///
/// Starts from `base_node_score` at the candidate itself and walks up to the
/// document root, adding `depth * depth_factor` for every boosted node and
/// subtracting it for every demoted one. `depth` is the candidate's address
/// depth, not the ancestor's.
#[must_use]
pub fn node_score(node: &NodeRef, depth: usize, heuristics: &Heuristics) -> f64 {
    let mut score = heuristics.base_node_score;
    let mut current = Some(*node);

    while let Some(n) = current {
        let parent = n.parent();
        // The document node has no parent and carries no signal
        if parent.is_none() {
            break;
        }
        score += classify(&n, heuristics).contribution(depth, heuristics.depth_factor);
        current = parent;
    }

    score
}
