// ABOUTME: Fixed catalog of categorized hedge-phrase patterns.
// ABOUTME: The declarative table is compiled once into read-only process-wide state.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Linguistic family a hedge phrase belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HedgeCategory {
    Uncertainty,
    Contrast,
    Perception,
    Opinion,
}

impl HedgeCategory {
    /// Categories in scan order.
    pub const ALL: [HedgeCategory; 4] = [
        HedgeCategory::Uncertainty,
        HedgeCategory::Contrast,
        HedgeCategory::Perception,
        HedgeCategory::Opinion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HedgeCategory::Uncertainty => "uncertainty",
            HedgeCategory::Contrast => "contrast",
            HedgeCategory::Perception => "perception",
            HedgeCategory::Opinion => "opinion",
        }
    }
}

impl fmt::Display for HedgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// (category, pattern, label). Grouped by category in scan order.
const HEDGE_TABLE: &[(HedgeCategory, &str, &str)] = &[
    (HedgeCategory::Uncertainty, r"\bmaybe\b", "maybe"),
    (HedgeCategory::Uncertainty, r"\bpossibly\b", "possibly"),
    (HedgeCategory::Uncertainty, r"\bperhaps\b", "perhaps"),
    (HedgeCategory::Uncertainty, r"\bmight\b", "might"),
    (HedgeCategory::Uncertainty, r"\bcould be\b", "could be"),
    (HedgeCategory::Uncertainty, r"\bpotentially\b", "potentially"),
    (HedgeCategory::Contrast, r"\bhowever\b", "however"),
    (HedgeCategory::Contrast, r"\balthough\b", "although"),
    (HedgeCategory::Contrast, r"\bnevertheless\b", "nevertheless"),
    (HedgeCategory::Contrast, r"\bnonetheless\b", "nonetheless"),
    (HedgeCategory::Perception, r"\bit seems\b", "it seems"),
    (HedgeCategory::Perception, r"\bit appears\b", "it appears"),
    (HedgeCategory::Perception, r"\barguably\b", "arguably"),
    (HedgeCategory::Perception, r"\bapparently\b", "apparently"),
    (HedgeCategory::Opinion, r"\bin my opinion\b", "in my opinion"),
    (HedgeCategory::Opinion, r"\bsome believe\b", "some believe"),
    (HedgeCategory::Opinion, r"\bto some extent\b", "to some extent"),
    (HedgeCategory::Opinion, r"\bi think\b", "I think"),
    (HedgeCategory::Opinion, r"\bi believe\b", "I believe"),
];

/// A single hedge phrase: its category, source pattern, display label and compiled regex.
#[derive(Debug)]
pub struct PatternEntry {
    pub category: HedgeCategory,
    pub pattern: &'static str,
    pub label: &'static str,
    regex: Regex,
}

impl PatternEntry {
    /// The compiled, case-insensitive regex for this entry.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Number of non-overlapping matches of this pattern in `text`.
    pub fn count_in(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }
}

static CATALOG: Lazy<Vec<PatternEntry>> = Lazy::new(|| {
    HEDGE_TABLE
        .iter()
        .map(|&(category, pattern, label)| PatternEntry {
            category,
            pattern,
            label,
            regex: Regex::new(&format!("(?i){}", pattern)).unwrap(),
        })
        .collect()
});

/// The hedge pattern catalog in scan order.
pub fn catalog() -> &'static [PatternEntry] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_is_grouped_in_scan_order() {
        let mut seen: Vec<HedgeCategory> = Vec::new();
        for entry in catalog() {
            if seen.last() != Some(&entry.category) {
                assert!(
                    !seen.contains(&entry.category),
                    "category {} appears in two groups",
                    entry.category
                );
                seen.push(entry.category);
            }
        }
        assert_eq!(seen, HedgeCategory::ALL.to_vec());
    }

    #[test]
    fn catalog_has_every_phrase() {
        assert_eq!(catalog().len(), 19);
        let labels: Vec<&str> = catalog().iter().map(|e| e.label).collect();
        assert!(labels.contains(&"could be"));
        assert!(labels.contains(&"I think"));
        assert!(labels.contains(&"to some extent"));
    }

    #[test]
    fn patterns_are_case_insensitive() {
        let might = catalog().iter().find(|e| e.label == "might").unwrap();
        assert_eq!(might.count_in("MIGHT might Might"), 3);
        let think = catalog().iter().find(|e| e.label == "I think").unwrap();
        assert_eq!(think.count_in("I think so. i THINK not."), 2);
    }

    #[test]
    fn patterns_respect_word_boundaries() {
        let might = catalog().iter().find(|e| e.label == "might").unwrap();
        assert_eq!(might.count_in("mighty almighty"), 0);
        let however = catalog().iter().find(|e| e.label == "however").unwrap();
        assert_eq!(however.count_in("however, howevers"), 1);
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&HedgeCategory::Perception).unwrap();
        assert_eq!(json, "\"perception\"");
    }
}
