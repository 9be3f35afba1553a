//! Result type for extraction output.

use serde::{Deserialize, Serialize};

/// Result of content extraction from an HTML document.
///
/// Serializes with camelCase keys: `title`, `contentText`, `contentHtml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Article title, empty when nothing plausible was found.
    pub title: String,

    /// Main content as plain text, one block per line.
    pub content_text: String,

    /// Main content as a sanitized `<div>`-wrapped HTML fragment.
    pub content_html: String,
}

impl ExtractionResult {
    /// Number of whitespace-separated words in `content_text`.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.content_text.split_whitespace().count()
    }
}
