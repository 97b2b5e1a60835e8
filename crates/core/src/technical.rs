// ABOUTME: Technical visibility scorer for raw page markup metrics.
// ABOUTME: Classifies page size, JS dependency and content-to-code ratio against fixed thresholds.

use serde::Serialize;

use crate::thresholds::{
    content_ratio_rating, round_to, JsDependencyRisk, Rating, SizeRisk, HTML_SIZE_LIMIT_BYTES,
};

/// Structural measurements of a fetched page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TechnicalInput {
    /// Length of the raw markup in UTF-8 bytes.
    pub markup_bytes: usize,
    /// Length of the raw markup in characters.
    pub markup_chars: usize,
    pub script_count: usize,
    /// Length of the extracted visible text in characters.
    pub text_length: usize,
}

impl TechnicalInput {
    /// Measure a page from its raw markup and extracted text.
    pub fn from_page(raw_html: &str, text: &str, script_count: usize) -> Self {
        Self {
            markup_bytes: raw_html.len(),
            markup_chars: raw_html.chars().count(),
            script_count,
            text_length: text.chars().count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalMetrics {
    pub html_size_bytes: usize,
    pub html_size_mb: f64,
    pub size_risk: SizeRisk,
    pub script_count: usize,
    pub text_length: usize,
    pub js_dependency_risk: JsDependencyRisk,
    pub js_note: String,
    /// Text as a percentage of markup, rounded to 1 decimal.
    pub content_ratio: f64,
    pub content_ratio_rating: Rating,
}

/// Score the technical visibility of a page.
pub fn score_technical(input: &TechnicalInput) -> TechnicalMetrics {
    let size_mb = input.markup_bytes as f64 / HTML_SIZE_LIMIT_BYTES as f64;
    let js_risk = JsDependencyRisk::for_text_length(input.text_length);

    let content_ratio = if input.markup_chars > 0 {
        input.text_length as f64 / input.markup_chars as f64 * 100.0
    } else {
        0.0
    };

    TechnicalMetrics {
        html_size_bytes: input.markup_bytes,
        html_size_mb: round_to(size_mb, 3),
        size_risk: SizeRisk::for_bytes(input.markup_bytes),
        script_count: input.script_count,
        text_length: input.text_length,
        js_dependency_risk: js_risk,
        js_note: js_risk.note().to_string(),
        content_ratio: round_to(content_ratio, 1),
        content_ratio_rating: content_ratio_rating(content_ratio),
    }
}
