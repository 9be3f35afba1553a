//! Content region assembly.
//!
//! Grows the winning candidate into the article region by merging adjacent
//! siblings that scored nearly as well, then marks residual clutter inside
//! the region (empty elements, lone links, link lists) so the serializer
//! can skip it. Nothing is detached here: the skip set is a flag map.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::dom::{self, NodeId, NodeRef};
use crate::error::{Error, Result};
use crate::link_density::{collect_link_stats, is_single_link_only};
use crate::options::Options;
use crate::prepare::Prepared;
use crate::scoring::Candidate;
use crate::tags::is_block;

/// Elements that are content even without text.
const SELF_CONTAINED_TAGS: [&str; 3] = ["br", "hr", "img"];

/// Containers dropped when their only text is a single link.
const LINK_ONLY_TAGS: [&str; 3] = ["p", "li", "div"];

/// The merged article region.
#[derive(Debug, Clone)]
pub struct Region<'a> {
    roots: Vec<NodeRef<'a>>,
    skipped: HashSet<NodeId>,
}

impl<'a> Region<'a> {
    /// Region roots in document order.
    #[must_use]
    pub fn roots(&self) -> &[NodeRef<'a>] {
        &self.roots
    }

    /// Whether the serializer must leave this node (and its subtree) out.
    #[must_use]
    pub fn is_skipped(&self, id: NodeId) -> bool {
        self.skipped.contains(&id)
    }

    /// First element with the given tag inside the region, in document
    /// order, ignoring skipped subtrees.
    #[must_use]
    pub fn first_element(&self, tag: &str) -> Option<NodeRef<'a>> {
        for root in &self.roots {
            let mut hidden: HashSet<NodeId> = HashSet::new();
            for node in std::iter::once(*root).chain(root.descendants()) {
                let under_skipped = node.parent().is_some_and(|p| hidden.contains(&p.id));
                if under_skipped || self.is_skipped(node.id) {
                    hidden.insert(node.id);
                    continue;
                }
                if dom::has_tag(&node, tag) {
                    return Some(node);
                }
            }
        }
        None
    }
}

/// Build the content region around `winner`.
///
/// Fails with `NoContentFound` when the winner is no longer part of the
/// prepared document.
pub fn assemble<'a>(
    winner: &Candidate,
    candidates: &[Candidate],
    prepared: &'a Prepared,
    options: &Options,
) -> Result<Region<'a>> {
    let body = prepared.body().ok_or(Error::NoContentFound)?;
    let winner_node = dom::find_node(&body, winner.id).ok_or(Error::NoContentFound)?;

    let roots = if winner_node.id == body.id {
        vec![winner_node]
    } else {
        let scores: HashMap<NodeId, f64> = candidates.iter().map(|c| (c.id, c.score)).collect();
        merge_siblings(winner_node, winner.score * options.sibling_score_ratio, &scores)
    };

    let mut skipped = HashSet::new();
    for root in &roots {
        mark_residuals(root, options, &mut skipped);
    }

    debug!(
        roots = roots.len(),
        skipped = skipped.len(),
        "assembled content region"
    );

    Ok(Region { roots, skipped })
}

/// Walk outward from the winner in both directions, collecting qualifying
/// siblings. Roots come back in document order.
fn merge_siblings<'a>(
    winner: NodeRef<'a>,
    threshold: f64,
    scores: &HashMap<NodeId, f64>,
) -> Vec<NodeRef<'a>> {
    let qualifies = |node: &NodeRef| scores.get(&node.id).is_some_and(|s| *s >= threshold);

    let mut before = Vec::new();
    let mut sibling = dom::previous_element_sibling(&winner);
    while let Some(node) = sibling {
        if qualifies(&node) {
            before.push(node);
        } else if dom::text_len(&node) > 0 {
            break;
        }
        sibling = dom::previous_element_sibling(&node);
    }

    let mut after = Vec::new();
    let mut sibling = dom::next_element_sibling(&winner);
    while let Some(node) = sibling {
        if qualifies(&node) {
            after.push(node);
        } else if dom::text_len(&node) > 0 {
            break;
        }
        sibling = dom::next_element_sibling(&node);
    }

    before.reverse();
    before.push(winner);
    before.extend(after);
    before
}

/// Flag residual clutter below `root`. The root itself is never flagged.
fn mark_residuals(root: &NodeRef, options: &Options, skipped: &mut HashSet<NodeId>) {
    let mut inside_skipped: HashSet<NodeId> = HashSet::new();

    for node in root.descendants() {
        if node
            .parent()
            .is_some_and(|parent| inside_skipped.contains(&parent.id))
        {
            inside_skipped.insert(node.id);
            continue;
        }
        let Some(tag) = dom::tag_name(&node) else {
            continue;
        };
        if is_residual(&node, &tag, options) {
            skipped.insert(node.id);
            inside_skipped.insert(node.id);
        }
    }
}

fn is_residual(node: &NodeRef, tag: &str, options: &Options) -> bool {
    if SELF_CONTAINED_TAGS.contains(&tag) {
        return false;
    }

    let stats = collect_link_stats(node);
    if stats.text_len == 0 {
        return !dom::has_image(node);
    }

    if LINK_ONLY_TAGS.contains(&tag) && is_single_link_only(node) {
        return true;
    }

    is_block(tag)
        && stats.density() > options.max_residual_link_density
        && stats.text_len >= options.short_text_length
}
