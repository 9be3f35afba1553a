//! Class/id pattern lists and compiled regular expressions.
//!
//! Pattern lists are plain data (see [`crate::Options`]); `PatternSet`
//! compiles a list into a single case-insensitive regex. Fixed patterns used
//! by preparation and title selection are compiled once using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::options::Options;

// =============================================================================
// Default Pattern Lists
// =============================================================================

/// Class/id fragments likely to mark the article container.
pub const DEFAULT_POSITIVE_PATTERNS: &[&str] = &[
    "article", "content", "post", "main", "entry", "hentry", "story", "text", "body", "blog",
];

/// Class/id fragments likely to mark page furniture.
///
/// Fragments of three characters or fewer ("ad", "nav") only match whole
/// `-`/`_`/space separated tokens so that "header" or "shadow" stay clean.
pub const DEFAULT_NEGATIVE_PATTERNS: &[&str] = &[
    "sidebar", "comment", "ad", "ads", "advert", "footer", "nav", "navbar", "navigation",
    "share", "sharing", "related", "social", "sponsor", "promo", "banner", "widget", "menu",
    "breadcrumb", "popup", "modal", "cookie", "newsletter", "subscribe", "masthead",
    "outbrain", "taboola", "disqus", "skip-link",
];

/// Patterns up to this many characters require token boundaries.
const SHORT_PATTERN_LEN: usize = 3;

// =============================================================================
// Fixed Patterns
// =============================================================================

/// Inline styles that hide an element.
pub static HIDDEN_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(display\s*:\s*none|visibility\s*:\s*hidden)").expect("HIDDEN_STYLE regex")
});

/// Separators between an article title and a trailing site name.
///
/// `|` and `»` may touch the words around them; dashes need surrounding
/// whitespace so hyphenated words survive; `:` needs trailing whitespace.
pub static TITLE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*[|»]\s*|\s+[-–—]\s+|\s*:\s+").expect("TITLE_SEPARATOR regex")
});

/// Schemes that must never survive in `href`/`src`.
pub static UNSAFE_URL_SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(javascript|vbscript|data)\s*:").expect("UNSAFE_URL_SCHEME regex")
});

static DEFAULT_CLASS_PATTERNS: LazyLock<ClassPatterns> = LazyLock::new(|| ClassPatterns {
    positive: PatternSet::compile_static(DEFAULT_POSITIVE_PATTERNS),
    negative: PatternSet::compile_static(DEFAULT_NEGATIVE_PATTERNS),
});

// =============================================================================
// Pattern Sets
// =============================================================================

/// A compiled list of class/id fragments.
#[derive(Debug, Clone)]
pub struct PatternSet {
    regex: Option<Regex>,
}

impl PatternSet {
    /// Compile a list of fragments. Empty fragments are ignored; an empty
    /// list never matches.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let Some(source) = build_source(patterns) else {
            return Ok(Self { regex: None });
        };
        let regex = Regex::new(&source).map_err(|e| Error::InvalidOptions(e.to_string()))?;
        Ok(Self { regex: Some(regex) })
    }

    fn compile_static(patterns: &[&str]) -> Self {
        Self {
            regex: build_source(patterns)
                .map(|source| Regex::new(&source).expect("default pattern regex")),
        }
    }

    /// Check whether a class or id string contains any fragment.
    #[must_use]
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(name))
    }

    /// True when the set was built from an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regex.is_none()
    }
}

fn build_source<S: AsRef<str>>(patterns: &[S]) -> Option<String> {
    let alternatives: Vec<String> = patterns
        .iter()
        .map(|p| p.as_ref().trim().to_ascii_lowercase())
        .filter(|p| !p.is_empty())
        .map(|p| {
            let escaped = regex::escape(&p);
            if p.chars().count() <= SHORT_PATTERN_LEN {
                format!("(?:^|[^a-z0-9]){escaped}(?:[^a-z0-9]|$)")
            } else {
                escaped
            }
        })
        .collect();

    if alternatives.is_empty() {
        None
    } else {
        Some(format!("(?i){}", alternatives.join("|")))
    }
}

/// Positive and negative class/id sets for one extraction call.
#[derive(Debug, Clone)]
pub struct ClassPatterns {
    /// Article-like fragments.
    pub positive: PatternSet,
    /// Boilerplate fragments.
    pub negative: PatternSet,
}

impl ClassPatterns {
    /// Compile the pattern lists of `options`, reusing the shared defaults
    /// when the lists are unchanged.
    pub fn from_options(options: &Options) -> Result<Self> {
        let positive = if is_default_list(&options.positive_patterns, DEFAULT_POSITIVE_PATTERNS) {
            DEFAULT_CLASS_PATTERNS.positive.clone()
        } else {
            PatternSet::new(&options.positive_patterns)?
        };
        let negative = if is_default_list(&options.negative_patterns, DEFAULT_NEGATIVE_PATTERNS) {
            DEFAULT_CLASS_PATTERNS.negative.clone()
        } else {
            PatternSet::new(&options.negative_patterns)?
        };
        Ok(Self { positive, negative })
    }

    /// Classify a combined class + id string.
    #[must_use]
    pub fn classify(&self, class_and_id: &str) -> ClassSignal {
        if class_and_id.trim().is_empty() {
            return ClassSignal::default();
        }
        ClassSignal {
            positive: self.positive.is_match(class_and_id),
            negative: self.negative.is_match(class_and_id),
        }
    }

    /// What protects a negatively matched class/id string from removal.
    ///
    /// A separate positive token (`post` in `"post sidebar"`) shields the
    /// element outright. A compound token carrying both signals
    /// (`article-footer`, `main-menu`) yields its positive segments as
    /// owners: the element is only part of the article when it sits inside
    /// an element named by one of them.
    #[must_use]
    pub fn shield(&self, class_and_id: &str) -> Shield {
        let mut owners: Vec<String> = Vec::new();
        for token in class_and_id.split_whitespace() {
            let signal = self.classify(token);
            if !signal.positive {
                continue;
            }
            if !signal.negative {
                return Shield::Token;
            }
            owners.extend(
                token
                    .split(|c: char| !c.is_ascii_alphanumeric())
                    .filter(|segment| {
                        let signal = self.classify(segment);
                        signal.positive && !signal.negative
                    })
                    .map(str::to_ascii_lowercase),
            );
        }
        if owners.is_empty() {
            Shield::None
        } else {
            Shield::Owners(owners)
        }
    }
}

/// Protection of a negative class/id match, see [`ClassPatterns::shield`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shield {
    /// Nothing positive: the element is furniture.
    None,
    /// A standalone positive token.
    Token,
    /// Positive segments of compound tokens.
    Owners(Vec<String>),
}

fn is_default_list(list: &[String], defaults: &[&str]) -> bool {
    list.len() == defaults.len() && list.iter().zip(defaults).all(|(a, b)| a == b)
}

/// Pattern hits for a single element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassSignal {
    /// Class/id matched a positive fragment.
    pub positive: bool,
    /// Class/id matched a negative fragment.
    pub negative: bool,
}

impl ClassSignal {
    /// Neither list matched.
    #[must_use]
    pub fn is_neutral(self) -> bool {
        !self.positive && !self.negative
    }
}
