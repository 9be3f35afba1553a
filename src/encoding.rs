//! Character encoding detection and transcoding.
//!
//! Fetchers hand over raw bytes. The charset comes from a byte order mark
//! when present, otherwise from a `<meta>` declaration near the top of the
//! document, otherwise UTF-8. Decoding is lossy: undecodable sequences
//! become U+FFFD instead of failing the extraction.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use tracing::trace;

/// Bytes inspected for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// `<meta charset="...">`
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("CHARSET_META_RE regex")
});

/// `<meta http-equiv="Content-Type" content="...; charset=...">`
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#)
        .expect("CONTENT_TYPE_CHARSET_RE regex")
});

/// Detect the character encoding of an HTML document.
///
/// Order: byte order mark, `<meta charset>`, `<meta http-equiv>`, UTF-8.
/// Declarations naming UTF-16 are treated as UTF-8, as browsers do: a
/// document whose markup was readable as ASCII cannot be UTF-16.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .map_or(UTF_8, Encoding::output_encoding)
}

fn declared_charset(head: &str) -> Option<String> {
    [&*CHARSET_META_RE, &*CONTENT_TYPE_CHARSET_RE]
        .into_iter()
        .find_map(|re| re.captures(head))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode HTML bytes to a UTF-8 string.
///
/// ```
/// use readable_extract::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert!(transcode_to_utf8(html).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        trace!(encoding = used.name(), "lossy decode replaced invalid sequences");
    }
    decoded.into_owned()
}
