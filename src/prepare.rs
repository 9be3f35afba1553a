//! Document preparation.
//!
//! Parses raw HTML, strips elements that can never be content, and flags
//! structural wrappers so scoring can look through them. Everything here
//! runs once per extraction call on a freshly parsed document.

use std::collections::HashSet;

use tracing::debug;

use crate::dom::{self, Document, NodeId, NodeRef};
use crate::error::{Error, Result};
use crate::patterns::{ClassPatterns, Shield, HIDDEN_STYLE};
use crate::tags::{PATTERN_EXEMPT_TAG_SET, STRIPPED_TAG_SET, WRAPPER_TAG_SET};

/// Structural elements kept even when marked hidden.
const DOCUMENT_TAGS: [&str; 3] = ["html", "head", "body"];

/// Bytes inspected for binary content.
const BINARY_SNIFF_LEN: usize = 1024;

/// A parsed, pruned document ready for scoring.
pub struct Prepared {
    document: Document,
    wrappers: HashSet<NodeId>,
    removed: usize,
}

impl Prepared {
    /// The pruned document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The document's `<body>`. Always present after a successful `prepare`.
    #[must_use]
    pub fn body(&self) -> Option<NodeRef<'_>> {
        dom::body(&self.document)
    }

    /// Whether a node is a structural wrapper, transparent to scoring.
    #[must_use]
    pub fn is_wrapper(&self, id: NodeId) -> bool {
        self.wrappers.contains(&id)
    }

    /// Number of nodes detached during pruning.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.removed
    }
}

/// Parse and prune a raw HTML document.
///
/// Fails with `EmptyInput` for blank input and with `MalformedDocument` when
/// the input is binary or produces a tree without a `<body>` (framesets).
/// Broken markup is never an error.
pub fn prepare(raw_html: &str, patterns: &ClassPatterns) -> Result<Prepared> {
    if raw_html.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let head = &raw_html.as_bytes()[..raw_html.len().min(BINARY_SNIFF_LEN)];
    if head.contains(&0) {
        return Err(Error::MalformedDocument(
            "input looks like binary data".to_string(),
        ));
    }

    let document = dom::parse(raw_html);
    if dom::body(&document).is_none() {
        return Err(Error::MalformedDocument(
            "document has no body".to_string(),
        ));
    }

    let removed = prune(&document, patterns);
    let wrappers = find_wrappers(&document, patterns);

    debug!(removed, wrappers = wrappers.len(), "prepared document");

    Ok(Prepared {
        document,
        wrappers,
        removed,
    })
}

/// Remove non-content nodes. Returns the number of subtrees detached.
fn prune(document: &Document, patterns: &ClassPatterns) -> usize {
    let Some(root) = document.select("html").nodes().first().copied() else {
        return 0;
    };

    // Collect first, detach afterwards: the walk never sees a mutated tree.
    let mut doomed: Vec<NodeRef> = Vec::new();
    let mut inside_doomed: HashSet<NodeId> = HashSet::new();

    for node in root.descendants() {
        if node
            .parent()
            .is_some_and(|parent| inside_doomed.contains(&parent.id))
        {
            inside_doomed.insert(node.id);
            continue;
        }

        if is_non_content(&node, patterns) {
            inside_doomed.insert(node.id);
            doomed.push(node);
        }
    }

    let count = doomed.len();
    dom::remove_all(&doomed);
    count
}

fn is_non_content(node: &NodeRef, patterns: &ClassPatterns) -> bool {
    if dom::is_comment_like(node) {
        return true;
    }
    let Some(tag) = dom::tag_name(node) else {
        return false;
    };
    if STRIPPED_TAG_SET.contains(tag.as_str()) {
        return true;
    }
    if is_hidden(node) && !DOCUMENT_TAGS.contains(&tag.as_str()) {
        return true;
    }
    if PATTERN_EXEMPT_TAG_SET.contains(tag.as_str()) {
        return false;
    }

    let names = dom::class_and_id(node);
    if !patterns.classify(&names).negative {
        return false;
    }
    match patterns.shield(&names) {
        Shield::None => true,
        Shield::Token => false,
        Shield::Owners(owners) => !is_inside_owner(node, &owners),
    }
}

/// Whether an ancestor is named by one of `owners`, by tag or class/id.
fn is_inside_owner(node: &NodeRef, owners: &[String]) -> bool {
    std::iter::successors(node.parent(), NodeRef::parent).any(|ancestor| {
        let tag = dom::tag_name(&ancestor).unwrap_or_default();
        let names = dom::class_and_id(&ancestor).to_ascii_lowercase();
        owners
            .iter()
            .any(|owner| tag == *owner || names.contains(owner.as_str()))
    })
}

fn is_hidden(node: &NodeRef) -> bool {
    dom::has_attribute(node, "hidden")
        || dom::get_attribute(node, "style").is_some_and(|style| HIDDEN_STYLE.is_match(&style))
}

/// Single-child containers with no text and no class/id signal.
fn find_wrappers(document: &Document, patterns: &ClassPatterns) -> HashSet<NodeId> {
    let mut wrappers = HashSet::new();
    let Some(body) = dom::body(document) else {
        return wrappers;
    };

    for node in body.descendants() {
        let Some(tag) = dom::tag_name(&node) else {
            continue;
        };
        if !WRAPPER_TAG_SET.contains(tag.as_str()) {
            continue;
        }
        if is_structural_wrapper(&node, patterns) {
            wrappers.insert(node.id);
        }
    }

    wrappers
}

fn is_structural_wrapper(node: &NodeRef, patterns: &ClassPatterns) -> bool {
    let mut element_children = 0;
    for child in node.children() {
        if child.is_element() {
            element_children += 1;
            if element_children > 1 {
                return false;
            }
        } else if child.is_text() && !dom::is_blank_text(&child) {
            return false;
        }
    }

    element_children == 1 && patterns.classify(&dom::class_and_id(node)).is_neutral()
}
