//! Word-level accuracy measurement.
//!
//! Extracted text is compared with a hand-written reference as two sets of
//! lowercase whitespace tokens. `CorpusReport` averages the per-document
//! scores so the tunable constants in [`crate::Options`] can be compared
//! against a directory of reference documents.

use std::collections::HashSet;

/// Precision, recall and their harmonic mean for one document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FScore {
    /// Share of extracted words that are expected.
    pub precision: f64,
    /// Share of expected words that were extracted.
    pub recall: f64,
    /// Harmonic mean of precision and recall.
    pub fscore: f64,
}

impl FScore {
    /// Both texts empty: nothing to miss, nothing extra.
    #[must_use]
    pub fn perfect() -> Self {
        Self {
            precision: 1.0,
            recall: 1.0,
            fscore: 1.0,
        }
    }

    /// No overlap at all.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            precision: 0.0,
            recall: 0.0,
            fscore: 0.0,
        }
    }

    fn from_counts(shared: usize, extracted: usize, expected: usize) -> Self {
        let ratio = |num: usize, den: usize| if den == 0 { 0.0 } else { num as f64 / den as f64 };
        let precision = ratio(shared, extracted);
        let recall = ratio(shared, expected);
        let fscore = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        Self {
            precision,
            recall,
            fscore,
        }
    }
}

/// Compare extracted text with the expected text.
///
/// ```
/// use readable_extract::evaluation::calculate_fscore;
///
/// let score = calculate_fscore("the quick brown fox", "The quick brown fox jumps");
/// assert_eq!(score.precision, 1.0);
/// assert_eq!(score.recall, 0.8);
/// ```
#[must_use]
pub fn calculate_fscore(extracted: &str, expected: &str) -> FScore {
    let extracted = word_set(extracted);
    let expected = word_set(expected);

    match (extracted.is_empty(), expected.is_empty()) {
        (true, true) => FScore::perfect(),
        (true, false) | (false, true) => FScore::zero(),
        (false, false) => {
            let shared = extracted.intersection(&expected).count();
            FScore::from_counts(shared, extracted.len(), expected.len())
        }
    }
}

fn word_set(text: &str) -> HashSet<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Outcome of one corpus document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentScore {
    /// Document name (file stem).
    pub name: String,
    /// Score, or `None` when extraction failed.
    pub score: Option<FScore>,
}

/// Aggregated scores over a corpus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusReport {
    documents: Vec<DocumentScore>,
}

impl CorpusReport {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scored document.
    pub fn record(&mut self, name: impl Into<String>, score: FScore) {
        self.documents.push(DocumentScore {
            name: name.into(),
            score: Some(score),
        });
    }

    /// Record a document whose extraction failed. Failures count as zero in
    /// the means.
    pub fn record_failure(&mut self, name: impl Into<String>) {
        self.documents.push(DocumentScore {
            name: name.into(),
            score: None,
        });
    }

    /// All recorded documents, in insertion order.
    #[must_use]
    pub fn documents(&self) -> &[DocumentScore] {
        &self.documents
    }

    /// Number of failed documents.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.documents.iter().filter(|d| d.score.is_none()).count()
    }

    /// Mean of every metric over all documents.
    #[must_use]
    pub fn mean(&self) -> FScore {
        if self.documents.is_empty() {
            return FScore::zero();
        }
        let n = self.documents.len() as f64;
        let (p, r, f) = self
            .documents
            .iter()
            .filter_map(|d| d.score)
            .fold((0.0, 0.0, 0.0), |(p, r, f), s| {
                (p + s.precision, r + s.recall, f + s.fscore)
            });
        FScore {
            precision: p / n,
            recall: r / n,
            fscore: f / n,
        }
    }

    /// The `count` lowest-scoring documents, worst first. Failures sort
    /// before any scored document.
    #[must_use]
    pub fn worst(&self, count: usize) -> Vec<&DocumentScore> {
        let mut sorted: Vec<&DocumentScore> = self.documents.iter().collect();
        sorted.sort_by(|a, b| {
            let fa = a.score.map_or(-1.0, |s| s.fscore);
            let fb = b.score.map_or(-1.0, |s| s.fscore);
            fa.total_cmp(&fb).then_with(|| a.name.cmp(&b.name))
        });
        sorted.truncate(count);
        sorted
    }
}
