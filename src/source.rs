//! Request boundary.
//!
//! A request names a document either by URL or by carrying its HTML. URLs
//! are resolved through a caller-supplied [`Fetcher`]; this crate ships no
//! network client. Fetch failures stay in their own error type so callers
//! never confuse them with extraction failures.

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::options::Options;
use crate::result::ExtractionResult;
use crate::{extract_bytes_with_options, extract_with_options};

/// Document retrieval failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The URL could not be parsed or uses an unsupported scheme.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection, DNS, TLS or timeout failure.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP status {0}")]
    Status(u16),
}

/// Failures of a whole request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// Neither a URL nor HTML was supplied.
    #[error("No URL or HTML provided")]
    MissingInput,

    /// The document could not be fetched.
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] FetchError),

    /// The document was obtained but extraction failed.
    #[error("Extraction failed: {0}")]
    Extract(#[from] Error),
}

/// An extraction request. Raw HTML wins when both fields are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Request {
    /// Page to fetch when no HTML is given.
    pub url: Option<String>,
    /// Document to extract from directly.
    pub html: Option<String>,
}

impl Request {
    /// Request carrying a document.
    #[must_use]
    pub fn from_html(html: impl Into<String>) -> Self {
        Self {
            url: None,
            html: Some(html.into()),
        }
    }

    /// Request naming a page to fetch.
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            html: None,
        }
    }
}

/// Retrieves raw document bytes for a URL.
///
/// Timeouts, redirects and headers are the implementation's business.
pub trait Fetcher {
    /// Fetch the document at `url`.
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError>;
}

/// Parse a request URL. Only `http` and `https` are accepted.
pub fn parse_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw.trim()).map_err(|e| FetchError::InvalidUrl(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(FetchError::InvalidUrl(format!(
            "{raw}: unsupported scheme {scheme}"
        ))),
    }
}

/// Resolve a request to a document and extract it.
///
/// Empty strings count as absent, so `{"url": "...", "html": ""}` fetches.
pub fn extract_request(
    request: &Request,
    fetcher: &dyn Fetcher,
    options: &Options,
) -> Result<ExtractionResult, SourceError> {
    let html = request.html.as_deref().filter(|h| !h.is_empty());
    let url = request.url.as_deref().filter(|u| !u.trim().is_empty());

    if let Some(html) = html {
        return Ok(extract_with_options(html, options)?);
    }

    let Some(raw_url) = url else {
        return Err(SourceError::MissingInput);
    };

    let url = parse_url(raw_url)?;
    debug!(%url, "fetching document");
    let bytes = fetcher.fetch(&url)?;
    debug!(%url, len = bytes.len(), "fetched document");

    Ok(extract_bytes_with_options(&bytes, options)?)
}
