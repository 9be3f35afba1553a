//! Error types for readable-extract.
//!
//! This module defines the error types returned by extraction operations.
//! Every variant is terminal for the call: extraction is a pure function of
//! its input, so retrying with the same document cannot change the outcome.

/// Error type for extraction operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input was empty or whitespace-only.
    #[error("Input document is empty")]
    EmptyInput,

    /// Input could not be turned into a usable document tree.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// The document parsed, but no element scored as plausible content.
    #[error("No extractable content found")]
    NoContentFound,

    /// Extraction options could not be loaded or compiled.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl Error {
    /// Returns true when the error points at bad caller input rather than
    /// at the limits of the content heuristic.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::MalformedDocument(_) | Self::InvalidOptions(_)
        )
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
