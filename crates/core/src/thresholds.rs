// ABOUTME: Shared fixed-threshold classification tables used by every scorer.
// ABOUTME: Holds the hedge-density and content-ratio ratings plus the size and JS-dependency risks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hedge densities below this percentage rate EXCELLENT.
pub const HEDGE_EXCELLENT_BELOW: f64 = 0.1;
/// Hedge densities below this percentage rate GOOD.
pub const HEDGE_GOOD_BELOW: f64 = 0.2;
/// Hedge densities below this percentage rate FAIR; anything else is POOR.
pub const HEDGE_FAIR_BELOW: f64 = 0.5;

/// Density above which the hedge CLI exits non-zero by default.
pub const DEFAULT_DENSITY_THRESHOLD: f64 = 0.2;

/// Content-to-code ratios above these percentages rate EXCELLENT, GOOD and FAIR.
pub const CONTENT_RATIO_EXCELLENT_ABOVE: f64 = 25.0;
pub const CONTENT_RATIO_GOOD_ABOVE: f64 = 15.0;
pub const CONTENT_RATIO_FAIR_ABOVE: f64 = 5.0;

/// Raw markup larger than this many bytes is a size risk.
pub const HTML_SIZE_LIMIT_BYTES: usize = 1024 * 1024;

/// Extracted text shorter than these lengths signals JS-rendered content.
pub const JS_CRITICAL_TEXT_BELOW: usize = 500;
pub const JS_MEDIUM_TEXT_BELOW: usize = 2000;

/// Four-level quality rating shared by hedge density and content ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Excellent => "EXCELLENT",
            Rating::Good => "GOOD",
            Rating::Fair => "FAIR",
            Rating::Poor => "POOR",
        }
    }

    /// Recommendation text attached to a hedge-density rating.
    pub fn hedge_recommendation(&self) -> &'static str {
        match self {
            Rating::Excellent => "Content has strong confidence signals. Maintain current tone.",
            Rating::Good => "Minor improvements possible. Review flagged hedges.",
            Rating::Fair => "Significant hedging detected. Review and reduce uncertainty language.",
            Rating::Poor => {
                "High hedge density hurts AI citation probability. Major rewrite recommended."
            }
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rate a hedge density expressed as a percentage of words.
///
/// Bands are inclusive at the lower bound: 0.1 is GOOD and 0.5 is POOR.
pub fn hedge_rating(density: f64) -> Rating {
    if density < HEDGE_EXCELLENT_BELOW {
        Rating::Excellent
    } else if density < HEDGE_GOOD_BELOW {
        Rating::Good
    } else if density < HEDGE_FAIR_BELOW {
        Rating::Fair
    } else {
        Rating::Poor
    }
}

/// Rate a content-to-code ratio expressed as a percentage.
pub fn content_ratio_rating(ratio: f64) -> Rating {
    if ratio > CONTENT_RATIO_EXCELLENT_ABOVE {
        Rating::Excellent
    } else if ratio > CONTENT_RATIO_GOOD_ABOVE {
        Rating::Good
    } else if ratio > CONTENT_RATIO_FAIR_ABOVE {
        Rating::Fair
    } else {
        Rating::Poor
    }
}

/// Risk that a page exceeds what crawlers are willing to download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SizeRisk {
    High,
    Low,
}

impl SizeRisk {
    pub fn for_bytes(bytes: usize) -> Self {
        if bytes > HTML_SIZE_LIMIT_BYTES {
            SizeRisk::High
        } else {
            SizeRisk::Low
        }
    }
}

impl fmt::Display for SizeRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SizeRisk::High => "HIGH",
            SizeRisk::Low => "LOW",
        };
        write!(f, "{}", s)
    }
}

/// Risk that the page's content only appears after JavaScript runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JsDependencyRisk {
    Critical,
    Medium,
    Low,
}

impl JsDependencyRisk {
    pub fn for_text_length(text_length: usize) -> Self {
        if text_length < JS_CRITICAL_TEXT_BELOW {
            JsDependencyRisk::Critical
        } else if text_length < JS_MEDIUM_TEXT_BELOW {
            JsDependencyRisk::Medium
        } else {
            JsDependencyRisk::Low
        }
    }

    /// Fixed explanatory note for this risk level.
    pub fn note(&self) -> &'static str {
        match self {
            JsDependencyRisk::Critical => {
                "Very little text in raw HTML - content likely requires JS"
            }
            JsDependencyRisk::Medium => "Limited text in raw HTML - some content may require JS",
            JsDependencyRisk::Low => "Substantial text in raw HTML",
        }
    }
}

impl fmt::Display for JsDependencyRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JsDependencyRisk::Critical => "CRITICAL",
            JsDependencyRisk::Medium => "MEDIUM",
            JsDependencyRisk::Low => "LOW",
        };
        write!(f, "{}", s)
    }
}

/// Round to a fixed number of decimal places, halves away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
