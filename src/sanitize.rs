//! Allow-list serialization of the content region.
//!
//! One walk over the region produces both outputs: `html`, a `<div>`-wrapped
//! fragment restricted to safe tags and attributes, and `text`, the same
//! content as plain lines. Producing both from the same walk keeps them in
//! agreement, so re-extracting the fragment yields the same text.

use crate::assemble::Region;
use crate::dom::{self, NodeRef};
use crate::patterns::UNSAFE_URL_SCHEME;
use crate::tags::{is_allowed, is_block, is_void, TEXT_BLOCK_TAG_SET};

/// Allowed elements whose children may themselves be blocks.
const FLOW_TAGS: [&str; 6] = ["ul", "ol", "dl", "li", "blockquote", "dd"];

/// Serialized content region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    /// Sanitized HTML fragment.
    pub html: String,
    /// Plain text, one block per line.
    pub text: String,
}

/// Serialize a region.
#[must_use]
pub fn render(region: &Region) -> Rendered {
    let mut writer = FragmentWriter::new(region);
    writer.html.push_str("<div>");
    for root in region.roots() {
        writer.push_node(root, false);
    }
    writer.html.push_str("</div>");
    writer.finish()
}

/// Escape text or attribute values for HTML output.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Whether a URL may appear in `href` or `src`.
#[must_use]
pub fn is_safe_url(url: &str) -> bool {
    let compact: String = url.chars().filter(|c| !c.is_control()).collect();
    !compact.trim().is_empty() && !UNSAFE_URL_SCHEME.is_match(&compact)
}

fn is_block_element(node: &NodeRef) -> bool {
    dom::tag_name(node).is_some_and(|tag| is_block(&tag))
}

struct FragmentWriter<'r, 'a> {
    region: &'r Region<'a>,
    html: String,
    lines: Vec<String>,
    line: String,
}

impl<'r, 'a> FragmentWriter<'r, 'a> {
    fn new(region: &'r Region<'a>) -> Self {
        Self {
            region,
            html: String::new(),
            lines: Vec::new(),
            line: String::new(),
        }
    }

    fn finish(mut self) -> Rendered {
        self.break_line();
        Rendered {
            html: self.html,
            text: self.lines.join("\n"),
        }
    }

    /// End the current text line. Blank lines are dropped.
    fn break_line(&mut self) {
        let line = dom::collapse_whitespace(&self.line);
        if !line.is_empty() {
            self.lines.push(line);
        }
        self.line.clear();
    }

    fn push_text(&mut self, text: &str) {
        self.html.push_str(&escape_html(text));
        self.line.push_str(text);
    }

    /// `phrasing` is true inside elements that cannot hold paragraphs.
    fn push_node(&mut self, node: &NodeRef, phrasing: bool) {
        if node.is_text() {
            self.push_text(&node.text());
            return;
        }
        let Some(tag) = dom::tag_name(node) else {
            return;
        };
        if self.region.is_skipped(node.id) {
            return;
        }

        if is_block(&tag) && phrasing {
            // Blocks inside phrasing are unwrapped, allowed or not: a `<p>`
            // inside a `<p>` or `<a>` would not survive re-parsing.
            self.push_text(" ");
            self.push_children(node, true);
            self.push_text(" ");
        } else if is_allowed(&tag) {
            self.push_allowed(node, &tag);
        } else if is_block(&tag) {
            self.push_block_children(node);
        } else {
            self.push_children(node, phrasing);
        }
    }

    fn push_children(&mut self, node: &NodeRef, phrasing: bool) {
        for child in node.children() {
            self.push_node(&child, phrasing);
        }
    }

    /// Children of an unwrapped block container. Inline runs are wrapped in
    /// `<p>` so block boundaries survive the unwrapping.
    fn push_block_children(&mut self, node: &NodeRef) {
        let mut open = false;

        for child in node.children() {
            if is_block_element(&child) {
                if open {
                    self.close_paragraph();
                    open = false;
                }
                self.push_node(&child, false);
                continue;
            }

            if !open {
                if !self.has_visible_content(&child) {
                    continue;
                }
                self.break_line();
                self.html.push_str("<p>");
                open = true;
            }
            self.push_node(&child, true);
        }

        if open {
            self.close_paragraph();
        }
    }

    fn close_paragraph(&mut self) {
        self.html.push_str("</p>");
        self.break_line();
    }

    fn has_visible_content(&self, node: &NodeRef) -> bool {
        if node.is_text() {
            return !dom::is_blank_text(node);
        }
        node.is_element()
            && !self.region.is_skipped(node.id)
            && (dom::text_len(node) > 0 || dom::has_image(node))
    }

    fn push_allowed(&mut self, node: &NodeRef, tag: &str) {
        let breaks_line = TEXT_BLOCK_TAG_SET.contains(tag);

        if is_void(tag) {
            match tag {
                "img" => self.push_image(node),
                _ => {
                    self.html.push('<');
                    self.html.push_str(tag);
                    self.html.push('>');
                }
            }
            if breaks_line {
                self.break_line();
            }
            return;
        }

        if breaks_line {
            self.break_line();
        }

        self.html.push('<');
        self.html.push_str(tag);
        if tag == "a" {
            if let Some(href) = dom::get_attribute(node, "href").filter(|h| is_safe_url(h)) {
                self.push_attribute("href", &href);
            }
        }
        self.html.push('>');

        let phrasing = !FLOW_TAGS.contains(&tag);
        self.push_children(node, phrasing);

        self.html.push_str("</");
        self.html.push_str(tag);
        self.html.push('>');

        if breaks_line {
            self.break_line();
        }
    }

    fn push_image(&mut self, node: &NodeRef) {
        let Some(src) = dom::get_attribute(node, "src").filter(|s| is_safe_url(s)) else {
            return;
        };
        self.html.push_str("<img");
        self.push_attribute("src", &src);
        if let Some(alt) = dom::get_attribute(node, "alt") {
            self.push_attribute("alt", &alt);
        }
        self.html.push('>');
    }

    fn push_attribute(&mut self, name: &str, value: &str) {
        self.html.push(' ');
        self.html.push_str(name);
        self.html.push_str("=\"");
        self.html.push_str(&escape_html(value));
        self.html.push('"');
    }
}
