//! JSON response envelope.
//!
//! Success: `{"title", "content", "html"}`. Failure: `{"error"}` plus an
//! HTTP-style status that keeps bad input, unextractable pages and fetch
//! failures apart.

use serde::Serialize;

use crate::error::Error;
use crate::result::ExtractionResult;
use crate::source::{FetchError, SourceError};

/// Status for caller input problems.
pub const STATUS_BAD_REQUEST: u16 = 400;
/// Status when the page parsed but held no content.
pub const STATUS_UNPROCESSABLE: u16 = 422;
/// Status when the upstream fetch failed.
pub const STATUS_BAD_GATEWAY: u16 = 502;
/// Status for success.
pub const STATUS_OK: u16 = 200;

/// Serialized response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    /// Extraction succeeded.
    Success {
        /// Article title.
        title: String,
        /// Plain text content.
        content: String,
        /// Sanitized HTML fragment.
        html: String,
    },
    /// Extraction failed.
    Failure {
        /// Human-readable error message.
        error: String,
        /// Response status; not serialized.
        #[serde(skip)]
        status: u16,
    },
}

impl Envelope {
    /// Build the envelope for a request outcome.
    #[must_use]
    pub fn from_outcome(outcome: Result<ExtractionResult, SourceError>) -> Self {
        match outcome {
            Ok(result) => Self::from(result),
            Err(err) => Self::from(err),
        }
    }

    /// Response status.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Success { .. } => STATUS_OK,
            Self::Failure { status, .. } => *status,
        }
    }

    /// Whether this is a success envelope.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<ExtractionResult> for Envelope {
    fn from(result: ExtractionResult) -> Self {
        Self::Success {
            title: result.title,
            content: result.content_text,
            html: result.content_html,
        }
    }
}

impl From<SourceError> for Envelope {
    fn from(err: SourceError) -> Self {
        Self::Failure {
            status: status_for(&err),
            error: err.to_string(),
        }
    }
}

impl From<Error> for Envelope {
    fn from(err: Error) -> Self {
        Self::from(SourceError::Extract(err))
    }
}

/// Status for a failed request.
#[must_use]
pub fn status_for(err: &SourceError) -> u16 {
    match err {
        SourceError::MissingInput | SourceError::Fetch(FetchError::InvalidUrl(_)) => {
            STATUS_BAD_REQUEST
        }
        SourceError::Fetch(FetchError::Network(_) | FetchError::Status(_)) => STATUS_BAD_GATEWAY,
        SourceError::Extract(err) if err.is_input_error() => STATUS_BAD_REQUEST,
        SourceError::Extract(_) => STATUS_UNPROCESSABLE,
    }
}
