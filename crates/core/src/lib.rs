// ABOUTME: Core analysis library for GeoLens AI-visibility scoring.
// ABOUTME: Re-exports the hedge scanner, density scorer, technical scorer, strategy table and AgentFacts rules.

//! GeoLens core - heuristic scoring of web content for generative-engine visibility.
//!
//! Everything in this crate is pure: callers hand in text (or page metrics)
//! and get structured results back. Fetching and rendering live in the
//! `geolens-fetch` and `geolens-cli` crates.
//!
//! # Example
//!
//! ```
//! use geolens_core::{analyze, DensityReport, Rating};
//!
//! let report = analyze("It might work, however results could be mixed.", false);
//! match report {
//!     DensityReport::Analyzed(result) => {
//!         assert_eq!(result.hedge_count, 3);
//!         assert_eq!(result.rating, Rating::Poor);
//!     }
//!     DensityReport::Failed(_) => unreachable!(),
//! }
//! ```

pub mod agentfacts;
pub mod catalog;
pub mod content;
pub mod density;
pub mod error;
pub mod scanner;
pub mod strategy;
pub mod technical;
pub mod thresholds;

pub use crate::agentfacts::generate::{generate, generate_at, AgentFactsSchema, GenerateOptions, HumanOversight};
pub use crate::agentfacts::validate::{validate, ValidationResult};
pub use crate::catalog::{catalog, HedgeCategory, PatternEntry};
pub use crate::content::{audit_content, ContentAudit};
pub use crate::density::{analyze, score, AnalysisResult, CategoryCounts, DensityReport, EmptyReport};
pub use crate::error::AnalysisError;
pub use crate::scanner::{scan, Finding, HedgeMatch};
pub use crate::strategy::{assess_discovery_strategy, DiscoveryStrategy, SiteAge};
pub use crate::technical::{score_technical, TechnicalInput, TechnicalMetrics};
pub use crate::thresholds::{JsDependencyRisk, Rating, SizeRisk};

/// Count words in a text string using whitespace splitting.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
