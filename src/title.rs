//! Title selection.
//!
//! Tries, in order: the `<title>` element without its site-name suffix, the
//! first `<h1>` of the content region, the first `<h1>` of the document.
//! Never fails; an empty string means nothing plausible was found.

use crate::assemble::Region;
use crate::dom::{self, Document, NodeRef};
use crate::options::Options;
use crate::patterns::TITLE_SEPARATOR;

/// Quote characters stripped from both ends of a title.
const QUOTE_CHARS: [char; 8] = ['"', '\'', '“', '”', '‘', '’', '«', '»'];

/// Select the document title.
#[must_use]
pub fn select_title(document: &Document, region: Option<&Region>, options: &Options) -> String {
    if let Some(title) = document
        .select("title")
        .nodes()
        .first()
        .map(|node| strip_site_suffix(&normalize_title(&node.text()), options.min_title_length))
        .filter(|title| !title.is_empty())
    {
        return title;
    }

    if let Some(title) = region
        .and_then(|region| region.first_element("h1"))
        .map(|h1| heading_text(&h1))
        .filter(|title| !title.is_empty())
    {
        return title;
    }

    document
        .select("h1")
        .nodes()
        .iter()
        .map(heading_text)
        .find(|title| !title.is_empty())
        .unwrap_or_default()
}

fn heading_text(node: &NodeRef) -> String {
    normalize_title(&dom::text_content(node))
}

/// Collapse whitespace, trim, and strip surrounding quotes.
#[must_use]
pub fn normalize_title(raw: &str) -> String {
    let collapsed = dom::collapse_whitespace(raw);
    collapsed.trim_matches(&QUOTE_CHARS[..]).trim().to_string()
}

/// Remove a trailing site name after the last separator, unless that would
/// leave fewer than `min_len` characters.
#[must_use]
pub fn strip_site_suffix(title: &str, min_len: usize) -> String {
    let Some(last) = TITLE_SEPARATOR.find_iter(title).last() else {
        return title.to_string();
    };
    let head = normalize_title(&title[..last.start()]);
    if head.chars().count() >= min_len {
        head
    } else {
        title.to_string()
    }
}
