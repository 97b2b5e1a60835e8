// ABOUTME: Content-authority audit built on the hedge catalog and shared thresholds.
// ABOUTME: Summarizes a page's hedge density with a short list of distinct hedge examples.

use std::collections::HashSet;

use serde::Serialize;

use crate::scanner::matches;
use crate::thresholds::{hedge_rating, round_to, Rating};
use crate::word_count;

/// Maximum number of distinct hedge examples reported.
pub const MAX_HEDGE_EXAMPLES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentAudit {
    pub word_count: usize,
    pub hedge_count: usize,
    pub hedge_density: f64,
    pub confidence_rating: Rating,
    /// Distinct matched phrases as written on the page, in first-seen order.
    pub hedge_examples: Vec<String>,
}

/// Audit the confidence of page text.
///
/// Unlike the hedge tool, an empty page is not an error here: it scores a
/// density of zero so the rest of the audit can proceed.
pub fn audit_content(text: &str) -> ContentAudit {
    let word_count = word_count(text);

    let mut hedge_count = 0;
    let mut seen = HashSet::new();
    let mut hedge_examples = Vec::new();
    for m in matches(text) {
        hedge_count += 1;
        if hedge_examples.len() < MAX_HEDGE_EXAMPLES && seen.insert(m.text) {
            hedge_examples.push(m.text.to_string());
        }
    }

    let density = if word_count > 0 {
        hedge_count as f64 / word_count as f64 * 100.0
    } else {
        0.0
    };

    ContentAudit {
        word_count,
        hedge_count,
        hedge_density: round_to(density, 3),
        confidence_rating: hedge_rating(density),
        hedge_examples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_and_dedupes_examples() {
        let audit = audit_content("Maybe it works. maybe not. Maybe! However, it seems odd.");
        assert_eq!(audit.word_count, 10);
        assert_eq!(audit.hedge_count, 5);
        assert_eq!(audit.hedge_density, 50.0);
        assert_eq!(audit.confidence_rating, Rating::Poor);
        assert_eq!(audit.hedge_examples, vec!["Maybe", "maybe", "However", "it seems"]);
    }

    #[test]
    fn empty_text_is_excellent() {
        let audit = audit_content("");
        assert_eq!(audit.word_count, 0);
        assert_eq!(audit.hedge_count, 0);
        assert_eq!(audit.hedge_density, 0.0);
        assert_eq!(audit.confidence_rating, Rating::Excellent);
        assert!(audit.hedge_examples.is_empty());
    }

    #[test]
    fn examples_are_capped() {
        let text = "arguably it seems nonetheless nevertheless although however \
                    potentially could be might perhaps possibly maybe";
        let audit = audit_content(text);
        assert_eq!(audit.hedge_count, 12);
        assert_eq!(audit.hedge_examples.len(), MAX_HEDGE_EXAMPLES);
        assert_eq!(audit.hedge_examples[0], "maybe");
        assert!(!audit.hedge_examples.contains(&"arguably".to_string()));
    }

    #[test]
    fn casing_variants_are_distinct_examples() {
        let audit = audit_content("PERHAPS perhaps Perhaps perhaps");
        assert_eq!(audit.hedge_count, 4);
        assert_eq!(audit.hedge_examples, vec!["PERHAPS", "perhaps", "Perhaps"]);
    }
}
