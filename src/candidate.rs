//! Content root candidates.
//!
//! A [`Candidate`] is the hypothesis that one element is the root of the
//! article. All of its scores are computed eagerly when it is built:
//!
//! - **node score**: container signals along the ancestor chain
//! - **text density**: how often children are followed by text or text tags
//! - **text length**: characters of the rendered subtree
//! - **text score**: weighted first-child text lengths of text tags
//! - **total score**: `(text_length / text_density * text_score) ^ node_score`
//!
//! Non-finite values are kept as they are. A NaN total fails every `>=`
//! comparison and is dropped by [`Candidate::is_match_requirements`].

use std::fmt;

use dom_query::{NodeRef, Selection};

use crate::classifier;
use crate::dom;
use crate::error::{Error, Result};
use crate::heuristics::Heuristics;
use crate::sanitize;
use crate::seize::Seize;
use crate::tags::TagClass;
use crate::text;
use crate::url_utils::UrlResolver;
use crate::xpath::{AddressScore, StructuralAddress};

/// One scored content root hypothesis.
#[derive(Clone)]
pub struct Candidate<'a> {
    node: NodeRef<'a>,
    address: StructuralAddress,
    address_score: AddressScore,
    node_score: f64,
    text_density: f64,
    text_length: usize,
    text_score: f64,
    total_score: f64,
    match_standard: bool,
    min_text_length: usize,
    min_total_score: f64,
    min_node_score: f64,
    resolver: UrlResolver,
}

impl<'a> Candidate<'a> {
    /// Score the first node of `selection` in the context of `seize`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the selection is empty.
    pub fn new(seize: &Seize<'a>, selection: &Selection<'a>) -> Result<Self> {
        let node = dom::first_node(selection)
            .ok_or_else(|| Error::InvalidArgument("DOM node must be defined".to_string()))?;

        Ok(Self::build(
            node,
            StructuralAddress::of(&node),
            &seize.options().heuristics,
            seize.resolver(),
        ))
    }

    /// Score `node` whose address has already been computed.
    pub(crate) fn build(
        node: NodeRef<'a>,
        address: StructuralAddress,
        heuristics: &Heuristics,
        resolver: &UrlResolver,
    ) -> Self {
        let address_score = address.score();
        let node_score = classifier::node_score(&node, address_score.depth, heuristics);
        let text_density = text_density(&node, heuristics);
        let text_length = text::render(&node).chars().count();
        let text_score = text_score(&node, text_length, heuristics);
        let total_score =
            (text_length as f64 / text_density * text_score).powf(node_score);

        Self {
            node,
            address,
            address_score,
            node_score,
            text_density,
            text_length,
            text_score,
            total_score,
            match_standard: is_standard(&node),
            min_text_length: heuristics.min_text_length,
            min_total_score: heuristics.min_total_score,
            min_node_score: heuristics.min_node_score,
            resolver: resolver.clone(),
        }
    }

    /// The candidate element.
    #[must_use]
    pub fn node(&self) -> NodeRef<'a> {
        self.node
    }

    #[must_use]
    pub fn address(&self) -> &StructuralAddress {
        &self.address
    }

    #[must_use]
    pub fn address_score(&self) -> AddressScore {
        self.address_score
    }

    #[must_use]
    pub fn node_score(&self) -> f64 {
        self.node_score
    }

    #[must_use]
    pub fn text_density(&self) -> f64 {
        self.text_density
    }

    /// Length of the rendered text in characters.
    #[must_use]
    pub fn text_length(&self) -> usize {
        self.text_length
    }

    #[must_use]
    pub fn text_score(&self) -> f64 {
        self.text_score
    }

    #[must_use]
    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    /// No disallowed context below the node and no non-content ancestor above it.
    #[must_use]
    pub fn is_match_standard(&self) -> bool {
        self.match_standard
    }

    /// Standard check plus minimum text length, total score and node score.
    #[must_use]
    pub fn is_match_requirements(&self) -> bool {
        self.match_standard
            && self.text_length >= self.min_text_length
            && self.total_score >= self.min_total_score
            && self.node_score >= self.min_node_score
    }

    /// Sanitize the candidate's subtree in place and return the node.
    ///
    /// This is destructive: scores are not recomputed afterwards.
    pub fn prepare_content(&self) -> NodeRef<'a> {
        sanitize::sanitize(self.node, &self.resolver)
    }
}

impl fmt::Debug for Candidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("address", &self.address.to_string())
            .field("node_score", &self.node_score)
            .field("text_density", &self.text_density)
            .field("text_length", &self.text_length)
            .field("text_score", &self.text_score)
            .field("total_score", &self.total_score)
            .field("match_standard", &self.match_standard)
            .finish_non_exhaustive()
    }
}

/// Something that can be rendered as text: a raw node or a candidate.
#[derive(Clone, Copy)]
pub enum RenderTarget<'a, 'c> {
    Node(NodeRef<'a>),
    Candidate(&'c Candidate<'a>),
}

impl<'a> RenderTarget<'a, '_> {
    /// The node to render.
    #[must_use]
    pub fn node(&self) -> NodeRef<'a> {
        match self {
            RenderTarget::Node(node) => *node,
            RenderTarget::Candidate(candidate) => candidate.node(),
        }
    }
}

impl fmt::Debug for RenderTarget<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderTarget::Node(node) => f.debug_tuple("Node").field(&node.id).finish(),
            RenderTarget::Candidate(candidate) => f.debug_tuple("Candidate").field(candidate).finish(),
        }
    }
}

impl<'a> From<NodeRef<'a>> for RenderTarget<'a, '_> {
    fn from(node: NodeRef<'a>) -> Self {
        RenderTarget::Node(node)
    }
}

impl<'a, 'c> From<&'c Candidate<'a>> for RenderTarget<'a, 'c> {
    fn from(candidate: &'c Candidate<'a>) -> Self {
        RenderTarget::Candidate(candidate)
    }
}

/// A root the sanitizer would strip is never an article.
fn is_standard(node: &NodeRef) -> bool {
    !dom::is_tag_in(node, TagClass::Removable)
        && dom::find_descendant(node, TagClass::DisallowedContext).is_none()
        && !dom::element_ancestors(node)
            .iter()
            .any(|a| dom::is_tag_in(a, TagClass::NonContentAncestor))
}

/// Start at 1, then step up for every child followed by text or a text tag
/// and step down for every child followed by anything else.
fn text_density(node: &NodeRef, heuristics: &Heuristics) -> f64 {
    let mut density = 1.0;
    for child in node.children() {
        let Some(next) = child.next_sibling() else {
            continue;
        };
        if next.is_text() || dom::is_tag_in(&next, TagClass::ContentText) {
            density += heuristics.text_density_step;
        } else {
            density -= heuristics.text_density_step;
        }
    }
    density
}

fn text_score(node: &NodeRef, text_length: usize, heuristics: &Heuristics) -> f64 {
    let sum: f64 = node
        .descendants()
        .into_iter()
        .filter(|d| dom::is_tag_in(d, TagClass::ContentText))
        .filter_map(|el| el.first_child())
        .filter(NodeRef::is_text)
        .map(|text_node| text_node_score(&text_node, node, heuristics))
        .sum();

    sum / text_length as f64
}

fn text_node_score(text_node: &NodeRef, candidate: &NodeRef, heuristics: &Heuristics) -> f64 {
    let length = text_node.text().trim().chars().count();
    if length < heuristics.min_text_node_length {
        return 0.0;
    }

    let levels = levels_between(text_node, candidate);
    let multiplier = 1.0 - heuristics.nesting_penalty * levels as f64;
    (length as f64 * multiplier).powf(heuristics.text_score_exponent)
}

/// Elements strictly between `node` and its ancestor `candidate`.
fn levels_between(node: &NodeRef, candidate: &NodeRef) -> usize {
    let mut levels = 0;
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.id == candidate.id {
            break;
        }
        if parent.is_element() {
            levels += 1;
        }
        current = parent.parent();
    }
    levels
}
