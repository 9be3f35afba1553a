//! # readable-extract
//!
//! Extracts the main readable content of a web page: its title, its
//! article text, and a minimal sanitized HTML fragment. Navigation, ads,
//! sidebars, comments and other page furniture are discarded.
//!
//! ## Quick Start
//!
//! ```rust
//! use readable_extract::extract;
//!
//! let html = r#"<html><head><title>My Article | Example.com</title></head>
//! <body>
//!   <nav><a href="/">Home</a> <a href="/about">About</a></nav>
//!   <article>
//!     <p>The first paragraph holds enough prose, with a comma, to count.</p>
//!     <p>The second paragraph continues the story in the same container.</p>
//!   </article>
//! </body></html>"#;
//!
//! let result = extract(html)?;
//! assert_eq!(result.title, "My Article");
//! assert!(result.content_text.starts_with("The first paragraph"));
//! assert!(!result.content_text.contains("About"));
//! # Ok::<(), readable_extract::Error>(())
//! ```
//!
//! ## How it works
//!
//! 1. **Prepare**: parse with html5ever, strip scripts, styles, hidden
//!    elements and boilerplate containers, flag structural wrappers.
//! 2. **Score**: paragraphs earn points for prose runs; part of each score
//!    flows to the enclosing containers; class/id hints and link density
//!    adjust the totals.
//! 3. **Assemble**: the best candidate absorbs strong adjacent siblings;
//!    empty elements, lone links and link lists inside it are dropped.
//! 4. **Render**: an allow-list serializer writes the HTML fragment and the
//!    plain text in one pass.
//! 5. **Title**: `<title>` without its site-name suffix, else the first
//!    `<h1>`.
//!
//! Every constant involved lives in [`Options`].

mod error;
mod extract;
mod options;
mod result;

/// Thin adapter over `dom_query`.
pub mod dom;

/// Tag catalogs.
pub mod tags;

/// Class/id pattern lists and compiled regexes.
pub mod patterns;

/// Parsing and pruning.
pub mod prepare;

/// Link density measurement.
pub mod link_density;

/// Candidate scoring.
pub mod scoring;

/// Content region assembly.
pub mod assemble;

/// Allow-list serialization.
pub mod sanitize;

/// Title selection.
pub mod title;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Request boundary and fetcher trait.
pub mod source;

/// JSON response envelope.
pub mod envelope;

/// Word-level F-score for corpus evaluation.
pub mod evaluation;

// Public API - re-exports
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use options::Options;
pub use result::ExtractionResult;
pub use source::{extract_request, FetchError, Fetcher, Request, SourceError};

/// Extracts the main content of an HTML document using default options.
///
/// # Errors
///
/// - [`Error::EmptyInput`] for empty or whitespace-only input
/// - [`Error::MalformedDocument`] for binary input or documents without a body
/// - [`Error::NoContentFound`] when nothing scores as content
///
/// # Example
///
/// ```rust
/// use readable_extract::{extract, Error};
///
/// assert_eq!(extract("").unwrap_err(), Error::EmptyInput);
/// assert_eq!(
///     extract("<html><body><nav>Home About</nav></body></html>").unwrap_err(),
///     Error::NoContentFound
/// );
/// ```
pub fn extract(html: &str) -> Result<ExtractionResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts the main content of an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use readable_extract::{extract_with_options, Options};
///
/// let html = "<body><div class='prose'><p>Custom patterns decide which containers look like articles.</p></div></body>";
/// let options = Options {
///     positive_patterns: vec!["prose".to_string()],
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options)?;
/// assert!(result.content_text.starts_with("Custom patterns"));
/// # Ok::<(), readable_extract::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractionResult> {
    extract::extract_content(html, options)
}

/// Extracts the main content of HTML bytes, detecting the character
/// encoding from a byte order mark or `<meta>` declaration.
///
/// Invalid sequences are replaced with U+FFFD rather than failing.
///
/// ```rust
/// use readable_extract::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9 culture is the subject of this short paragraph.</p></body></html>";
/// let result = extract_bytes(html)?;
/// assert!(result.content_text.contains("Café"));
/// # Ok::<(), readable_extract::Error>(())
/// ```
pub fn extract_bytes(html: &[u8]) -> Result<ExtractionResult> {
    extract_bytes_with_options(html, &Options::default())
}

/// Byte input with custom options.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractionResult> {
    let html = encoding::transcode_to_utf8(html);
    extract_with_options(&html, options)
}
