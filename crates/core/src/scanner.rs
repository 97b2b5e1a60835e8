// ABOUTME: Hedge scanner that applies the pattern catalog to free text.
// ABOUTME: Emits located Findings with a clipped context window around each match.

use serde::{Deserialize, Serialize};

use crate::catalog::{catalog, HedgeCategory, PatternEntry};

/// Characters of context kept on each side of a match.
pub const CONTEXT_RADIUS: usize = 30;

const ELLIPSIS: &str = "...";

/// One hedge occurrence in the scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Display label of the matched pattern.
    pub word: String,
    pub category: HedgeCategory,
    /// Character offset of the match start.
    pub position: usize,
    pub context: String,
}

/// A raw catalog match borrowed from the scanned text.
#[derive(Debug, Clone, Copy)]
pub struct HedgeMatch<'t> {
    pub entry: &'static PatternEntry,
    /// Byte offset of the match start.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
    /// The matched text as written in the input.
    pub text: &'t str,
}

/// Iterate every catalog match in pattern-then-match order.
pub fn matches(text: &str) -> impl Iterator<Item = HedgeMatch<'_>> {
    catalog().iter().flat_map(move |entry| {
        entry.regex().find_iter(text).map(move |m| HedgeMatch {
            entry,
            start: m.start(),
            end: m.end(),
            text: m.as_str(),
        })
    })
}

/// Scan `text` for hedge phrases.
///
/// Findings are ordered by pattern, not by position: every match of the first
/// catalog pattern comes before any match of the second, even when the second
/// occurs earlier in the text. Existing JSON consumers depend on this order.
pub fn scan(text: &str) -> Vec<Finding> {
    matches(text)
        .map(|m| Finding {
            word: m.entry.label.to_string(),
            category: m.entry.category,
            position: text[..m.start].chars().count(),
            context: context_window(text, m.start, m.end),
        })
        .collect()
}

/// Build the context snippet for a match spanning bytes `start..end`.
///
/// The window extends up to CONTEXT_RADIUS characters on each side, is
/// trimmed, and is marked with an ellipsis on every side where it was clipped.
pub fn context_window(text: &str, start: usize, end: usize) -> String {
    let window_start = text[..start]
        .char_indices()
        .rev()
        .take(CONTEXT_RADIUS)
        .last()
        .map_or(start, |(i, _)| i);
    let window_end = text[end..]
        .char_indices()
        .nth(CONTEXT_RADIUS)
        .map_or(text.len(), |(i, _)| end + i);

    let mut context = String::with_capacity(window_end - window_start + 2 * ELLIPSIS.len());
    if window_start > 0 {
        context.push_str(ELLIPSIS);
    }
    context.push_str(text[window_start..window_end].trim());
    if window_end < text.len() {
        context.push_str(ELLIPSIS);
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SCENARIO: &str = "It might work, however results could be mixed.";

    #[test]
    fn scan_finds_scenario_hedges() {
        let findings = scan(SCENARIO);
        let words: Vec<(&str, HedgeCategory)> = findings
            .iter()
            .map(|f| (f.word.as_str(), f.category))
            .collect();
        assert_eq!(
            words,
            vec![
                ("might", HedgeCategory::Uncertainty),
                ("could be", HedgeCategory::Uncertainty),
                ("however", HedgeCategory::Contrast),
            ]
        );
    }

    #[test]
    fn scan_orders_by_pattern_not_position() {
        // "however" appears before "maybe" in the text but maybe is scanned first.
        let findings = scan("However it works, maybe.");
        assert_eq!(findings[0].word, "maybe");
        assert_eq!(findings[1].word, "however");
        assert!(findings[1].position < findings[0].position);
    }

    #[test]
    fn hedge_count_is_sum_of_pattern_counts() {
        let text = "Perhaps it seems fine. However, I think it might be, although \
                    some believe it could be worse. Maybe. MAYBE. Arguably not.";
        let findings = scan(text);
        let expected: usize = catalog().iter().map(|e| e.count_in(text)).sum();
        assert_eq!(findings.len(), expected);
        for entry in catalog() {
            let from_entry = findings.iter().filter(|f| f.word == entry.label).count();
            assert_eq!(from_entry, entry.count_in(text), "pattern {}", entry.label);
            assert!(findings
                .iter()
                .filter(|f| f.word == entry.label)
                .all(|f| f.category == entry.category));
        }
    }

    #[test]
    fn position_is_character_offset() {
        let text = "Café naïve, maybe.";
        let findings = scan(text);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].position, 12);
    }

    #[test]
    fn context_unclipped_for_short_text() {
        let findings = scan("maybe later");
        assert_eq!(findings[0].context, "maybe later");
    }

    #[test]
    fn context_clipped_on_both_sides() {
        let prefix = "a".repeat(40);
        let suffix = "b".repeat(40);
        let text = format!("{} maybe {}", prefix, suffix);
        let findings = scan(&text);
        let context = &findings[0].context;
        assert!(context.starts_with("..."));
        assert!(context.ends_with("..."));
        // Each 30-char side includes the separating space.
        assert_eq!(context.chars().count(), 3 + 29 + 1 + 5 + 1 + 29 + 3);
    }

    #[test]
    fn context_window_respects_utf8_boundaries() {
        let text = format!("{} might {}", "é".repeat(50), "ü".repeat(50));
        let findings = scan(&text);
        let context = &findings[0].context;
        let inner = context.trim_start_matches("...").trim_end_matches("...");
        assert!(inner.contains("might"));
        assert!(inner.chars().count() <= 2 * CONTEXT_RADIUS + "might".len());
    }

    #[test]
    fn context_never_exceeds_bounds() {
        let text = "maybe ".repeat(100);
        for finding in scan(&text) {
            assert!(finding.context.chars().count() <= 2 * CONTEXT_RADIUS + 5 + 6);
        }
    }

    #[test]
    fn scan_empty_text() {
        assert!(scan("").is_empty());
    }
}
