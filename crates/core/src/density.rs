// ABOUTME: Density scorer turning hedge findings into a word-normalized rating.
// ABOUTME: Provides AnalysisResult, the EmptyInput report and the analyze() convenience entry point.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::catalog::HedgeCategory;
use crate::error::AnalysisError;
use crate::scanner::{scan, Finding};
use crate::thresholds::{hedge_rating, round_to, Rating};
use crate::word_count;

/// Findings shown when verbose output is off.
pub const FINDINGS_PREVIEW_LIMIT: usize = 10;

/// Per-category finding counts in the order categories first appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts(Vec<(HedgeCategory, usize)>);

impl CategoryCounts {
    /// Count categories, keeping first-appearance order.
    pub fn tally(categories: impl IntoIterator<Item = HedgeCategory>) -> Self {
        let mut counts: Vec<(HedgeCategory, usize)> = Vec::new();
        for category in categories {
            match counts.iter_mut().find(|(c, _)| *c == category) {
                Some((_, n)) => *n += 1,
                None => counts.push((category, 1)),
            }
        }
        CategoryCounts(counts)
    }

    /// Count for a category, zero when it never appeared.
    pub fn get(&self, category: HedgeCategory) -> usize {
        self.0
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, n)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (HedgeCategory, usize)> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries sorted by count, highest first. Ties keep appearance order.
    pub fn by_count_desc(&self) -> Vec<(HedgeCategory, usize)> {
        let mut sorted = self.0.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, count) in &self.0 {
            map.serialize_entry(category.as_str(), count)?;
        }
        map.end()
    }
}

/// Outcome of scoring a non-empty text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub word_count: usize,
    pub hedge_count: usize,
    /// Hedges per hundred words, rounded to 3 decimals.
    pub hedge_density: f64,
    pub rating: Rating,
    pub recommendation: String,
    pub by_category: CategoryCounts,
    pub findings: Vec<Finding>,
    pub truncated: bool,
}

/// Structured stand-in for an AnalysisResult when there was nothing to score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyReport {
    pub word_count: usize,
    pub error: String,
}

impl From<AnalysisError> for EmptyReport {
    fn from(err: AnalysisError) -> Self {
        Self {
            word_count: 0,
            error: err.to_string(),
        }
    }
}

/// What the hedge tool reports for one input: a score, or the reason there is none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DensityReport {
    Analyzed(AnalysisResult),
    Failed(EmptyReport),
}

impl DensityReport {
    /// The rounded density, if the analysis succeeded.
    pub fn hedge_density(&self) -> Option<f64> {
        match self {
            DensityReport::Analyzed(result) => Some(result.hedge_density),
            DensityReport::Failed(_) => None,
        }
    }

    /// True when a successful analysis has a density strictly above `threshold`.
    ///
    /// Failed analyses never exceed a threshold.
    pub fn exceeds(&self, threshold: f64) -> bool {
        self.hedge_density().is_some_and(|d| d > threshold)
    }
}

/// Score a text given the findings already scanned from it.
///
/// With `verbose` off only the first FINDINGS_PREVIEW_LIMIT findings are kept
/// and `truncated` records whether any were dropped.
pub fn score(
    text: &str,
    mut findings: Vec<Finding>,
    verbose: bool,
) -> Result<AnalysisResult, AnalysisError> {
    let word_count = word_count(text);
    if word_count == 0 {
        return Err(AnalysisError::EmptyInput);
    }

    let hedge_count = findings.len();
    let density = hedge_count as f64 / word_count as f64 * 100.0;
    let rating = hedge_rating(density);
    let by_category = CategoryCounts::tally(findings.iter().map(|f| f.category));

    let truncated = !verbose && hedge_count > FINDINGS_PREVIEW_LIMIT;
    if !verbose {
        findings.truncate(FINDINGS_PREVIEW_LIMIT);
    }

    Ok(AnalysisResult {
        word_count,
        hedge_count,
        hedge_density: round_to(density, 3),
        rating,
        recommendation: rating.hedge_recommendation().to_string(),
        by_category,
        findings,
        truncated,
    })
}

/// Scan and score `text` in one step.
pub fn analyze(text: &str, verbose: bool) -> DensityReport {
    match score(text, scan(text), verbose) {
        Ok(result) => DensityReport::Analyzed(result),
        Err(err) => {
            tracing::debug!(error = %err, "hedge analysis skipped");
            DensityReport::Failed(err.into())
        }
    }
}
