//! Link Density Measurement
//!
//! Link density is the fraction of a node's text that sits inside anchor
//! elements. Navigation blocks disguised as prose have a density close to 1;
//! article paragraphs sit close to 0.

use crate::dom::{self, NodeRef, Selection};

/// Text statistics of a node and the anchors inside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStats {
    /// Collapsed text length of the whole node.
    pub text_len: usize,
    /// Collapsed text length found inside `<a>` descendants.
    pub link_text_len: usize,
    /// Number of anchors with non-empty text.
    pub non_empty_links: usize,
    /// Number of anchors wrapping an image.
    pub image_links: usize,
}

impl LinkStats {
    /// Fraction of text inside anchors, in `0.0..=1.0`.
    ///
    /// A node without text has density 0.
    #[must_use]
    pub fn density(&self) -> f64 {
        if self.text_len == 0 {
            return 0.0;
        }
        (self.link_text_len as f64 / self.text_len as f64).min(1.0)
    }
}

/// Collect heuristics on link text.
///
/// Returns the node's text length together with the text length of every
/// anchor below it.
#[must_use]
pub fn collect_link_stats(node: &NodeRef) -> LinkStats {
    let mut stats = LinkStats {
        text_len: dom::text_len(node),
        ..LinkStats::default()
    };

    let links = Selection::from(*node).select("a");
    for link in links.nodes() {
        let link_len = dom::text_len(link);
        if link_len > 0 {
            stats.link_text_len += link_len;
            stats.non_empty_links += 1;
        }
        if !Selection::from(*link).select("img").is_empty() {
            stats.image_links += 1;
        }
    }

    stats
}

/// Fraction of a node's text that lies inside anchor elements.
#[must_use]
pub fn link_density(node: &NodeRef) -> f64 {
    collect_link_stats(node).density()
}

/// True when all of a node's text lives in exactly one text-bearing link.
///
/// Image links are never "link only": a linked picture is content.
#[must_use]
pub fn is_single_link_only(node: &NodeRef) -> bool {
    let stats = collect_link_stats(node);
    stats.non_empty_links == 1
        && stats.image_links == 0
        && stats.text_len > 0
        && stats.link_text_len >= stats.text_len
}
