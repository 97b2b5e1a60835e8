// ABOUTME: Discovery-strategy lookup keyed by how long a site has existed.
// ABOUTME: Maps launch year to a fixed visibility estimate, primary strategy and focus list.

use serde::Serialize;

const NEW_SITE_FOCUS: &[&str] = &[
    "Reddit presence in relevant subreddits",
    "Earn referring domains through guest posts",
    "Build social proof (Twitter, LinkedIn mentions)",
    "Technical foundation (AgentFacts for future)",
];
const NEW_SITE_AVOID: &[&str] = &[
    "Obsessing over GEO optimization",
    "Expecting quick AI visibility",
];
const EARLY_STAGE_FOCUS: &[&str] = &[
    "Continue web-augmented signals",
    "Begin basic GEO optimization",
    "Implement AgentFacts",
    "Build content authority",
];
const ESTABLISHED_FOCUS: &[&str] = &[
    "Comprehensive hedge density reduction",
    "Technical visibility optimization",
    "Complete AgentFacts implementation",
    "Content refresh cycle",
];
const AUTHORITY_FOCUS: &[&str] = &[
    "Citation monitoring",
    "Advanced GEO tactics",
    "Trust optimization",
    "Protocol innovation adoption",
];

/// Age bucket of a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteAge {
    New,
    Early,
    Established,
    Authority,
}

impl SiteAge {
    /// Bucket an age in whole years: <1, 1-2, 2-5, 5+.
    pub fn from_years(age: i32) -> Self {
        if age < 1 {
            SiteAge::New
        } else if age < 2 {
            SiteAge::Early
        } else if age < 5 {
            SiteAge::Established
        } else {
            SiteAge::Authority
        }
    }
}

/// Recommended discovery strategy for a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryStrategy {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility_estimate: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_strategy: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid: Option<&'static [&'static str]>,
}

impl DiscoveryStrategy {
    fn unknown() -> Self {
        Self {
            status: "Unknown",
            note: Some("Provide --launch-year for strategy recommendations"),
            visibility_estimate: None,
            primary_strategy: None,
            focus: None,
            avoid: None,
        }
    }

    fn for_age(age: SiteAge) -> Self {
        let (status, visibility, primary, focus, avoid) = match age {
            SiteAge::New => (
                "New Site (<1 year)",
                "~1%",
                "Web-augmented signals",
                NEW_SITE_FOCUS,
                Some(NEW_SITE_AVOID),
            ),
            SiteAge::Early => (
                "Early Stage (1-2 years)",
                "~3%",
                "Hybrid approach",
                EARLY_STAGE_FOCUS,
                None,
            ),
            SiteAge::Established => (
                "Established (2-5 years)",
                "~60%",
                "Full GEO optimization",
                ESTABLISHED_FOCUS,
                None,
            ),
            SiteAge::Authority => (
                "Authority (5+ years)",
                "~99%",
                "Maintain and defend",
                AUTHORITY_FOCUS,
                None,
            ),
        };

        Self {
            status,
            note: None,
            visibility_estimate: Some(visibility),
            primary_strategy: Some(primary),
            focus: Some(focus),
            avoid,
        }
    }
}

/// Look up the discovery strategy for a site launched in `launch_year`.
pub fn assess_discovery_strategy(launch_year: Option<i32>, current_year: i32) -> DiscoveryStrategy {
    match launch_year {
        Some(year) => {
            DiscoveryStrategy::for_age(SiteAge::from_years(current_year.saturating_sub(year)))
        }
        None => DiscoveryStrategy::unknown(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unknown_without_launch_year() {
        let strategy = assess_discovery_strategy(None, 2026);
        assert_eq!(strategy.status, "Unknown");
        assert!(strategy.visibility_estimate.is_none());
        let json = serde_json::to_value(&strategy).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "Unknown",
                "note": "Provide --launch-year for strategy recommendations"
            })
        );
    }

    #[test]
    fn buckets_by_age() {
        assert_eq!(assess_discovery_strategy(Some(2026), 2026).status, "New Site (<1 year)");
        assert_eq!(assess_discovery_strategy(Some(2025), 2026).status, "Early Stage (1-2 years)");
        assert_eq!(assess_discovery_strategy(Some(2024), 2026).status, "Established (2-5 years)");
        assert_eq!(assess_discovery_strategy(Some(2022), 2026).status, "Established (2-5 years)");
        assert_eq!(assess_discovery_strategy(Some(2021), 2026).status, "Authority (5+ years)");
    }

    #[test]
    fn future_launch_year_counts_as_new() {
        let strategy = assess_discovery_strategy(Some(2030), 2026);
        assert_eq!(strategy.status, "New Site (<1 year)");
    }

    #[test]
    fn only_new_sites_have_avoid_list() {
        let new = assess_discovery_strategy(Some(2026), 2026);
        assert_eq!(new.visibility_estimate, Some("~1%"));
        assert_eq!(new.avoid.map(|a| a.len()), Some(2));
        let authority = assess_discovery_strategy(Some(2000), 2026);
        assert_eq!(authority.visibility_estimate, Some("~99%"));
        assert_eq!(authority.primary_strategy, Some("Maintain and defend"));
        assert!(authority.avoid.is_none());
        assert_eq!(authority.focus.map(|f| f.len()), Some(4));
    }

    #[test]
    fn extreme_launch_years_do_not_overflow() {
        let ancient = assess_discovery_strategy(Some(i32::MIN), 2026);
        assert_eq!(ancient.status, "Authority (5+ years)");
        let far_future = assess_discovery_strategy(Some(i32::MAX), 2026);
        assert_eq!(far_future.status, "New Site (<1 year)");
        let from_min_year = assess_discovery_strategy(Some(i32::MAX), i32::MIN);
        assert_eq!(from_min_year.status, "New Site (<1 year)");
    }
}
