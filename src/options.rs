//! Configuration options for content extraction.
//!
//! The `Options` struct holds the pattern lists and heuristic constants that
//! drive scoring and cleanup. All numeric values are tunable: they fix the
//! role and relative effect of each signal, not an absolute truth, and can be
//! validated against a corpus with [`crate::evaluation`].
//!
//! Options deserialize from JSON with camelCase keys; missing keys fall back
//! to the defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::patterns::{DEFAULT_NEGATIVE_PATTERNS, DEFAULT_POSITIVE_PATTERNS};

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use readable_extract::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     min_text_length: 40,
///     sibling_score_ratio: 0.6,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Class/id fragments that indicate article content.
    ///
    /// Default: `article`, `content`, `post`, `main`, `entry`, `story`, `text`, `body`, `blog`
    pub positive_patterns: Vec<String>,

    /// Class/id fragments that indicate boilerplate.
    ///
    /// Elements matching these (and no positive pattern) are removed before
    /// scoring; elements matching both only get a score penalty.
    ///
    /// Default: `sidebar`, `comment`, `ad`, `footer`, `nav`, `share`, `related`, ...
    pub negative_patterns: Vec<String>,

    /// Minimum collapsed length of a text run for it to score.
    ///
    /// Default: `25`
    pub min_text_length: usize,

    /// Fractions of a node's own score added to its ancestor levels,
    /// nearest first.
    ///
    /// Default: `[0.5, 0.25]`
    pub ancestor_bonus_factors: Vec<f64>,

    /// Bonus per comma found in a scoring run.
    ///
    /// Default: `0.25`
    pub comma_bonus: f64,

    /// Characters per length bonus point in a scoring run.
    ///
    /// Default: `100`
    pub length_bonus_chars: usize,

    /// Cap on the length bonus of a single run.
    ///
    /// Default: `3.0`
    pub max_length_bonus: f64,

    /// Multiplier applied when class/id matches a positive pattern.
    ///
    /// Default: `1.25`
    pub positive_multiplier: f64,

    /// Multiplier applied when class/id matches a negative pattern.
    ///
    /// Default: `0.75`
    pub negative_multiplier: f64,

    /// Minimum sibling score, relative to the winner, for the sibling to be
    /// merged into the content region.
    ///
    /// Default: `0.5`
    pub sibling_score_ratio: f64,

    /// Link density above which an element inside the region is dropped.
    ///
    /// Default: `0.5`
    pub max_residual_link_density: f64,

    /// Elements with less text than this survive the residual link-density
    /// check (captions, credits).
    ///
    /// Default: `40`
    pub short_text_length: usize,

    /// Minimum length of a `<title>` after stripping a site-name suffix.
    /// Shorter remainders keep the full title.
    ///
    /// Default: `3`
    pub min_title_length: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            positive_patterns: to_owned_list(DEFAULT_POSITIVE_PATTERNS),
            negative_patterns: to_owned_list(DEFAULT_NEGATIVE_PATTERNS),
            min_text_length: 25,
            ancestor_bonus_factors: vec![0.5, 0.25],
            comma_bonus: 0.25,
            length_bonus_chars: 100,
            max_length_bonus: 3.0,
            positive_multiplier: 1.25,
            negative_multiplier: 0.75,
            sibling_score_ratio: 0.5,
            max_residual_link_density: 0.5,
            short_text_length: 40,
            min_title_length: 3,
        }
    }
}

impl Options {
    /// Load options from a JSON document.
    ///
    /// Unknown keys are ignored and missing keys take their default value.
    ///
    /// ```rust
    /// use readable_extract::Options;
    ///
    /// let options = Options::from_json(r#"{"minTextLength": 40, "positivePatterns": ["story"]}"#)?;
    /// assert_eq!(options.min_text_length, 40);
    /// assert_eq!(options.positive_patterns, vec!["story".to_string()]);
    /// # Ok::<(), readable_extract::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidOptions(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Reject values that would make scoring meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.length_bonus_chars == 0 {
            return Err(Error::InvalidOptions(
                "lengthBonusChars must be greater than zero".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.sibling_score_ratio) {
            return Err(Error::InvalidOptions(
                "siblingScoreRatio must be between 0 and 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.max_residual_link_density) {
            return Err(Error::InvalidOptions(
                "maxResidualLinkDensity must be between 0 and 1".to_string(),
            ));
        }
        if self.ancestor_bonus_factors.iter().any(|f| !f.is_finite() || *f < 0.0) {
            return Err(Error::InvalidOptions(
                "ancestorBonusFactors must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

fn to_owned_list(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| (*p).to_string()).collect()
}
