//! Tunable scoring tables.
//!
//! Every constant the candidate scorer uses lives in [`Heuristics`], which is
//! carried by [`crate::Options`]. Tests and callers can run the engine with
//! alternate keyword patterns or weights without touching global state.

use regex::Regex;

use crate::patterns::{CONTAINER_BOOST, CONTAINER_DEMOTE};

/// Keyword patterns and weights used to score candidates.
///
/// # Example
///
/// ```rust
/// use seize::{Heuristics, Options};
///
/// let options = Options {
///     heuristics: Heuristics {
///         min_text_length: 50,
///         ..Heuristics::default()
///     },
///     ..Options::default()
/// };
/// assert_eq!(options.heuristics.min_text_length, 50);
/// ```
#[derive(Debug, Clone)]
pub struct Heuristics {
    /// Class/id pattern of containers that likely hold the article.
    pub boost_pattern: Regex,

    /// Class/id pattern of page chrome containers.
    pub demote_pattern: Regex,

    /// Weight of one boost/demote signal per level of candidate depth.
    ///
    /// Default: `0.03`
    pub depth_factor: f64,

    /// Score the candidate node starts from before ancestor signals.
    ///
    /// Default: `1.0`
    pub base_node_score: f64,

    /// Amount added or subtracted per child in the text density walk.
    ///
    /// Default: `0.1`
    pub text_density_step: f64,

    /// Text nodes shorter than this (trimmed, in characters) score zero.
    ///
    /// Default: `15`
    pub min_text_node_length: usize,

    /// Exponent applied to a weighted text node length.
    ///
    /// Default: `1.25`
    pub text_score_exponent: f64,

    /// Multiplier lost per element between a text node and the candidate.
    ///
    /// Default: `0.1`
    pub nesting_penalty: f64,

    /// Minimum rendered text length (characters) of an acceptable candidate.
    ///
    /// Default: `100`
    pub min_text_length: usize,

    /// Minimum total score of an acceptable candidate.
    ///
    /// Default: `0.0`
    pub min_total_score: f64,

    /// Minimum node score of an acceptable candidate.
    ///
    /// Default: `0.0`
    pub min_node_score: f64,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            boost_pattern: CONTAINER_BOOST.clone(),
            demote_pattern: CONTAINER_DEMOTE.clone(),
            depth_factor: 0.03,
            base_node_score: 1.0,
            text_density_step: 0.1,
            min_text_node_length: 15,
            text_score_exponent: 1.25,
            nesting_penalty: 0.1,
            min_text_length: 100,
            min_total_score: 0.0,
            min_node_score: 0.0,
        }
    }
}
