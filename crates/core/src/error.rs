// ABOUTME: Error types for the GeoLens analysis core.
// ABOUTME: Provides AnalysisError for inputs the scorers cannot work with.

use thiserror::Error;

/// Errors raised by the density scorer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The input contained no whitespace-delimited words.
    #[error("No text to analyze")]
    EmptyInput,
}
