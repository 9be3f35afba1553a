//! Candidate scoring.
//!
//! Every candidate-capable element earns an own score from the prose runs
//! it holds directly. Part of that score flows up to the nearest
//! candidate-capable ancestors so that a container of many good paragraphs
//! outranks each paragraph alone. Accumulated scores are then weighted by
//! class/id signals and by link density.
//!
//! Scores are kept in side maps keyed by `NodeId`; the tree is read only.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::trace;

use crate::dom::{self, NodeId, NodeRef};
use crate::link_density::link_density;
use crate::options::Options;
use crate::patterns::ClassPatterns;
use crate::prepare::Prepared;
use crate::tags::{is_block, is_candidate, is_paragraph};

/// A scored content candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// The candidate element.
    pub id: NodeId,
    /// Adjusted score, always positive.
    pub score: f64,
    /// Collapsed text length of the whole subtree.
    pub text_len: usize,
    /// Position in document order, body first.
    pub order: usize,
}

impl Candidate {
    /// Best-first ordering: higher score, then more text, then earlier in
    /// the document.
    #[must_use]
    pub fn rank(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.text_len.cmp(&self.text_len))
            .then_with(|| self.order.cmp(&other.order))
    }
}

/// Score every candidate of a prepared document.
///
/// Returns candidates best-first; an empty vector means nothing in the
/// document looks like content.
#[must_use]
pub fn score_candidates(
    prepared: &Prepared,
    patterns: &ClassPatterns,
    options: &Options,
) -> Vec<Candidate> {
    let Some(body) = prepared.body() else {
        return Vec::new();
    };

    let order = dom::document_order(&body);
    let mut raw: HashMap<NodeId, f64> = HashMap::new();
    let mut nodes: HashMap<NodeId, NodeRef> = HashMap::new();

    for node in std::iter::once(body).chain(body.descendants()) {
        if !is_scorable(prepared, &node) {
            continue;
        }
        let own = own_score(&node, options);
        if own <= 0.0 {
            continue;
        }

        *raw.entry(node.id).or_insert(0.0) += own;
        nodes.insert(node.id, node);

        let mut levels = options.ancestor_bonus_factors.iter();
        let mut ancestor = node.parent();
        while let Some(current) = ancestor {
            if is_scorable(prepared, &current) {
                let Some(factor) = levels.next() else {
                    break;
                };
                *raw.entry(current.id).or_insert(0.0) += own * factor;
                nodes.insert(current.id, current);
            }
            ancestor = current.parent();
        }
    }

    let mut candidates: Vec<Candidate> = raw
        .into_iter()
        .filter_map(|(id, score)| {
            let node = nodes.get(&id)?;
            let adjusted = adjust(node, score, patterns, options);
            trace!(score, adjusted, tag = ?dom::tag_name(node), "candidate");
            (adjusted > 0.0).then(|| Candidate {
                id,
                score: adjusted,
                text_len: dom::text_len(node),
                order: order.get(&id).copied().unwrap_or(usize::MAX),
            })
        })
        .collect();

    candidates.sort_by(Candidate::rank);
    candidates
}

/// Pick the content root from best-first `candidates`.
///
/// A winning paragraph (`p`, `pre`, `blockquote`) hands over to its nearest
/// scorable ancestor when that ancestor is a candidate too, so headings and
/// short paragraphs that share its container stay in the region. The climb
/// repeats until the root is no longer paragraph-level.
#[must_use]
pub fn top_candidate(prepared: &Prepared, candidates: &[Candidate]) -> Option<Candidate> {
    let mut top = *candidates.first()?;
    let Some(body) = prepared.body() else {
        return Some(top);
    };
    let by_id: HashMap<NodeId, &Candidate> = candidates.iter().map(|c| (c.id, c)).collect();

    while let Some(node) = dom::find_node(&body, top.id) {
        if !dom::tag_name(&node).is_some_and(|tag| is_paragraph(&tag)) {
            break;
        }
        let Some(parent) = scorable_ancestor(prepared, &node) else {
            break;
        };
        let Some(container) = by_id.get(&parent.id) else {
            break;
        };
        trace!(from = top.score, to = container.score, "climbed to paragraph container");
        top = **container;
    }

    Some(top)
}

fn scorable_ancestor<'a>(prepared: &Prepared, node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    std::iter::successors(node.parent(), NodeRef::parent).find(|n| is_scorable(prepared, n))
}

/// Candidate-capable elements that are not transparent wrappers.
fn is_scorable(prepared: &Prepared, node: &NodeRef) -> bool {
    !prepared.is_wrapper(node.id) && dom::tag_name(node).is_some_and(|tag| is_candidate(&tag))
}

/// Score of the prose runs directly inside `node`.
///
/// Direct text and inline children form a run; block children end it.
fn own_score(node: &NodeRef, options: &Options) -> f64 {
    let mut score = 0.0;
    let mut run = String::new();

    for child in node.children() {
        if child.is_text() {
            run.push_str(&child.text());
            continue;
        }
        let Some(tag) = dom::tag_name(&child) else {
            continue;
        };
        if is_block(&tag) {
            score += run_score(&run, options);
            run.clear();
        } else {
            run.push_str(&child.text());
        }
    }
    score + run_score(&run, options)
}

fn run_score(run: &str, options: &Options) -> f64 {
    let len = dom::collapsed_len(run);
    if len < options.min_text_length {
        return 0.0;
    }
    let commas = run.matches(',').count() as f64;
    let length_bonus =
        (len as f64 / options.length_bonus_chars as f64).min(options.max_length_bonus);
    1.0 + options.comma_bonus * commas + length_bonus
}

fn adjust(node: &NodeRef, score: f64, patterns: &ClassPatterns, options: &Options) -> f64 {
    let signal = patterns.classify(&dom::class_and_id(node));
    let mut adjusted = score;
    if signal.positive {
        adjusted *= options.positive_multiplier;
    }
    if signal.negative {
        adjusted *= options.negative_multiplier;
    }
    adjusted * (1.0 - link_density(node))
}
