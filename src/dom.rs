//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate so the rest of the pipeline works
//! with a small, consistent vocabulary: lowercase tag names, combined
//! class/id strings, collapsed text lengths, element-only navigation.

use std::collections::HashMap;

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into a document.
///
/// html5ever never rejects input: unclosed tags and invalid nesting are
/// repaired the way browsers repair them.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tag/Node Information ===

/// Get tag name (lowercase) of an element node.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Check whether a node is an element with the given tag.
#[must_use]
pub fn has_tag(node: &NodeRef, tag: &str) -> bool {
    node.is_element()
        && node
            .node_name()
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

/// Nodes that are neither elements nor text: comments and processing
/// instructions once the document root is excluded.
#[inline]
#[must_use]
pub fn is_comment_like(node: &NodeRef) -> bool {
    !node.is_element() && !node.is_text()
}

// === Attribute Operations ===

/// Get any attribute value.
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    Selection::from(*node).attr(name).map(|s| s.to_string())
}

/// Check if attribute exists.
#[must_use]
pub fn has_attribute(node: &NodeRef, name: &str) -> bool {
    Selection::from(*node).has_attr(name)
}

/// Class and id joined by a space, for pattern matching.
#[must_use]
pub fn class_and_id(node: &NodeRef) -> String {
    let class = get_attribute(node, "class").unwrap_or_default();
    let id = get_attribute(node, "id").unwrap_or_default();
    match (class.is_empty(), id.is_empty()) {
        (true, true) => String::new(),
        (false, true) => class,
        (true, false) => id,
        (false, false) => format!("{class} {id}"),
    }
}

// === Text Content ===

/// All text of a node and its descendants.
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Character count of `text` after whitespace collapsing, without
/// allocating the collapsed string.
#[must_use]
pub fn collapsed_len(text: &str) -> usize {
    let mut len: usize = 0;
    let mut words: usize = 0;
    for word in text.split_whitespace() {
        len += word.chars().count();
        words += 1;
    }
    len + words.saturating_sub(1)
}

/// Collapsed text length of a node's whole subtree.
#[must_use]
pub fn text_len(node: &NodeRef) -> usize {
    collapsed_len(&text_content(node))
}

/// True when a text node holds only whitespace.
#[must_use]
pub fn is_blank_text(node: &NodeRef) -> bool {
    node.is_text() && node.text().trim().is_empty()
}

// === Tree Navigation ===

/// Direct element children, skipping text and comment nodes.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().filter(NodeRef::is_element).collect()
}

/// Get next element sibling (skipping text nodes).
#[must_use]
pub fn next_element_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut sibling = node.next_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            return Some(s);
        }
        sibling = s.next_sibling();
    }
    None
}

/// Get previous element sibling (skipping text nodes).
#[must_use]
pub fn previous_element_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut sibling = node.prev_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            return Some(s);
        }
        sibling = s.prev_sibling();
    }
    None
}

/// First `<body>` element of a document.
#[must_use]
pub fn body(doc: &Document) -> Option<NodeRef<'_>> {
    doc.select("body").nodes().first().copied()
}

/// Position of every node below `root` (inclusive) in document order.
#[must_use]
pub fn document_order(root: &NodeRef) -> HashMap<NodeId, usize> {
    let mut order = HashMap::new();
    order.insert(root.id, 0);
    for (index, node) in root.descendants().into_iter().enumerate() {
        order.insert(node.id, index + 1);
    }
    order
}

/// Find a node below `root` (inclusive) by id.
#[must_use]
pub fn find_node<'a>(root: &NodeRef<'a>, id: NodeId) -> Option<NodeRef<'a>> {
    if root.id == id {
        return Some(*root);
    }
    root.descendants().into_iter().find(|node| node.id == id)
}

/// True when the subtree contains an `<img>`.
#[must_use]
pub fn has_image(node: &NodeRef) -> bool {
    has_tag(node, "img") || !Selection::from(*node).select("img").is_empty()
}

/// Detach nodes from the tree.
///
/// Callers collect the nodes first; removal never happens while walking.
pub fn remove_all(nodes: &[NodeRef]) {
    for node in nodes.iter().rev() {
        Selection::from(*node).remove();
    }
}
