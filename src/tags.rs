//! Tag constants and catalogs.
//!
//! Provides both arrays (for iteration and selector building) and `HashSet`s
//! (for O(1) lookup) for every tag group the pipeline consults.

use std::collections::HashSet;
use std::sync::LazyLock;

// === Tag Lists (arrays for iteration) ===

/// Elements that never carry readable content and are removed before scoring.
pub static NON_CONTENT_TAGS: [&str; 13] = [
    "script", "style", "noscript", "template", "iframe", "object", "embed", "svg", "canvas",
    "button", "input", "select", "textarea",
];

/// Page-furniture containers removed by tag name alone.
pub static BOILERPLATE_TAGS: [&str; 3] = ["nav", "footer", "aside"];

/// Elements that may become content candidates.
pub static CANDIDATE_TAGS: [&str; 9] = [
    "p", "div", "article", "section", "td", "main", "blockquote", "pre", "body",
];

/// Containers that carry no meaning of their own when they only wrap one element.
pub static WRAPPER_TAGS: [&str; 4] = ["div", "span", "font", "center"];

/// Elements never removed because of their class or id.
pub static PATTERN_EXEMPT_TAGS: [&str; 6] = ["html", "head", "title", "body", "article", "main"];

/// Block-level elements: they end an inline text run.
pub static BLOCK_TAGS: [&str; 41] = [
    "address", "article", "aside", "blockquote", "body", "caption", "center", "dd", "details",
    "dialog", "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2",
    "h3", "h4", "h5", "h6", "header", "hr", "html", "li", "main", "nav", "ol", "p", "pre",
    "section", "summary", "table", "tbody", "td", "tfoot", "th", "ul",
];

/// Table row containers, also block-level for run splitting.
pub static TABLE_STRUCTURE_TAGS: [&str; 3] = ["thead", "tr", "colgroup"];

/// Elements kept in the sanitized fragment.
pub static ALLOWED_TAGS: [&str; 31] = [
    "p", "br", "hr", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "dl", "dt", "dd",
    "blockquote", "pre", "code", "em", "strong", "b", "i", "u", "s", "sub", "sup", "mark",
    "small", "q", "a", "img",
];

/// Allowed elements that start a new line in `content_text`.
pub static TEXT_BLOCK_TAGS: [&str; 17] = [
    "p", "hr", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "dl", "dt", "dd",
    "blockquote", "pre", "br",
];

/// Elements without children or closing tag.
pub static VOID_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Candidates that hold prose rather than structure. When one of these
/// wins, its enclosing candidate becomes the content root.
pub static PARAGRAPH_TAGS: [&str; 3] = ["p", "pre", "blockquote"];

// === Tag Sets (HashSets for O(1) lookup) ===

/// `NON_CONTENT_TAGS` and `BOILERPLATE_TAGS` as a `HashSet`
pub static STRIPPED_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    NON_CONTENT_TAGS.into_iter().chain(BOILERPLATE_TAGS).collect()
});

/// `CANDIDATE_TAGS` as a `HashSet`
pub static CANDIDATE_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    CANDIDATE_TAGS.into_iter().collect()
});

/// `WRAPPER_TAGS` as a `HashSet`
pub static WRAPPER_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    WRAPPER_TAGS.into_iter().collect()
});

/// `PATTERN_EXEMPT_TAGS` as a `HashSet`
pub static PATTERN_EXEMPT_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    PATTERN_EXEMPT_TAGS.into_iter().collect()
});

/// `BLOCK_TAGS` and `TABLE_STRUCTURE_TAGS` as a `HashSet`
pub static BLOCK_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    BLOCK_TAGS.into_iter().chain(TABLE_STRUCTURE_TAGS).collect()
});

/// `ALLOWED_TAGS` as a `HashSet`
pub static ALLOWED_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ALLOWED_TAGS.into_iter().collect()
});

/// `TEXT_BLOCK_TAGS` as a `HashSet`
pub static TEXT_BLOCK_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    TEXT_BLOCK_TAGS.into_iter().collect()
});

/// `VOID_TAGS` as a `HashSet`
pub static VOID_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    VOID_TAGS.into_iter().collect()
});

// === Helper Functions ===

/// Check if a tag is a block-level element.
#[inline]
#[must_use]
pub fn is_block(tag: &str) -> bool {
    BLOCK_TAG_SET.contains(tag)
}

/// Check if a tag may become a content candidate.
#[inline]
#[must_use]
pub fn is_candidate(tag: &str) -> bool {
    CANDIDATE_TAG_SET.contains(tag)
}

/// Check if a tag survives sanitization.
#[inline]
#[must_use]
pub fn is_allowed(tag: &str) -> bool {
    ALLOWED_TAG_SET.contains(tag)
}

/// Check if a tag is a void element.
#[inline]
#[must_use]
pub fn is_void(tag: &str) -> bool {
    VOID_TAG_SET.contains(tag)
}

/// Check if a tag is a paragraph-level candidate.
#[inline]
#[must_use]
pub fn is_paragraph(tag: &str) -> bool {
    PARAGRAPH_TAGS.contains(&tag)
}
