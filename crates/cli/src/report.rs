// ABOUTME: Plain-text rendering of hedge density, audit and validation results.
// ABOUTME: Each renderer returns the full report as a String so binaries only print it.

use std::fmt::Write;

use geolens_core::density::FINDINGS_PREVIEW_LIMIT;
use geolens_core::{DensityReport, ValidationResult};
use geolens_fetch::WELL_KNOWN_PATH;

use crate::audit::AuditReport;
use crate::format::{format_float, group_thousands};

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Render the hedge density report. Context lines are omitted unless `show_context`.
pub fn render_density_report(report: &DensityReport, show_context: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "HEDGE DENSITY ANALYSIS");
    let _ = writeln!(out, "{}", rule());

    let result = match report {
        DensityReport::Analyzed(result) => result,
        DensityReport::Failed(failed) => {
            let _ = writeln!(out);
            let _ = writeln!(out, "Error: {}", failed.error);
            return out;
        }
    };

    let _ = writeln!(out);
    let _ = writeln!(out, "Word Count: {}", group_thousands(result.word_count));
    let _ = writeln!(out, "Hedge Words Found: {}", result.hedge_count);
    let _ = writeln!(out, "Hedge Density: {}%", format_float(result.hedge_density));
    let _ = writeln!(out, "Rating: {}", result.rating);
    let _ = writeln!(out);
    let _ = writeln!(out, "Recommendation: {}", result.recommendation);

    if !result.by_category.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Breakdown by Category:");
        for (category, count) in result.by_category.by_count_desc() {
            let _ = writeln!(out, "  - {}: {}", category, count);
        }
    }

    if !result.findings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Hedges Found:");
        for (i, finding) in result.findings.iter().enumerate() {
            let _ = writeln!(out);
            let _ = writeln!(out, "  {}. \"{}\" ({})", i + 1, finding.word, finding.category);
            if show_context {
                let _ = writeln!(out, "     Context: {}", finding.context);
            }
        }
    }

    if result.truncated {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "  ... and {} more (use --verbose to see all)",
            result.hedge_count.saturating_sub(FINDINGS_PREVIEW_LIMIT)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule());
    out
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Render an audit as the plain-text GEO report.
pub fn render_audit_report(report: &AuditReport) -> String {
    let mut lines = vec![
        rule(),
        "GEO AUDIT REPORT".to_string(),
        format!("Target: {}", report.url),
        format!("Generated: {}", report.timestamp),
        rule(),
        String::new(),
    ];

    if let Some(tech) = &report.technical {
        lines.extend([
            "## TECHNICAL VISIBILITY".to_string(),
            String::new(),
            format!(
                "HTML Size: {} MB ({} bytes)",
                format_float(tech.html_size_mb),
                group_thousands(tech.html_size_bytes)
            ),
            format!("Size Risk: {} (limit: 1.0 MB)", tech.size_risk),
            String::new(),
            format!("Script Tags: {}", tech.script_count),
            format!("Raw Text Length: {} chars", group_thousands(tech.text_length)),
            format!("JS Dependency Risk: {}", tech.js_dependency_risk),
            format!("Note: {}", tech.js_note),
            String::new(),
            format!("Content-to-Code Ratio: {}%", format_float(tech.content_ratio)),
            format!("Rating: {}", tech.content_ratio_rating),
            String::new(),
        ]);
    }

    if let Some(content) = &report.content {
        lines.extend([
            "## CONTENT AUTHORITY".to_string(),
            String::new(),
            format!("Word Count: {}", group_thousands(content.word_count)),
            format!("Hedge Words Found: {}", content.hedge_count),
            format!("Hedge Density: {}%", format_float(content.hedge_density)),
            format!("Confidence Rating: {}", content.confidence_rating),
            String::new(),
        ]);
        if !content.hedge_examples.is_empty() {
            lines.push(format!("Examples: {}", content.hedge_examples.join(", ")));
            lines.push(String::new());
        }
    }

    if let Some(agent) = &report.agent_facts {
        lines.extend([
            "## AGENT INFRASTRUCTURE".to_string(),
            String::new(),
            format!("AgentFacts Present: {}", yes_no(agent.present)),
        ]);
        if agent.present {
            lines.push(format!(
                "Valid Schema: {}",
                yes_no(agent.valid.unwrap_or(false))
            ));
            if let Some(error) = &agent.error {
                lines.push(format!("Error: {}", error));
            }
        } else {
            lines.push(format!(
                "Recommendation: Implement AgentFacts at {}",
                WELL_KNOWN_PATH
            ));
        }
        lines.push(String::new());
    }

    if let Some(strategy) = &report.strategy {
        lines.extend([
            "## DISCOVERY STRATEGY".to_string(),
            String::new(),
            format!("Status: {}", strategy.status),
        ]);
        if let Some(estimate) = strategy.visibility_estimate {
            lines.push(format!("Estimated AI Visibility: {}", estimate));
            lines.push(format!(
                "Primary Strategy: {}",
                strategy.primary_strategy.unwrap_or_default()
            ));
            lines.push(String::new());
            if let Some(focus) = strategy.focus {
                lines.push("Focus Areas:".to_string());
                lines.extend(focus.iter().map(|item| format!("  - {}", item)));
            }
            if let Some(avoid) = strategy.avoid {
                lines.push(String::new());
                lines.push("Avoid:".to_string());
                lines.extend(avoid.iter().map(|item| format!("  - {}", item)));
            }
        } else if let Some(note) = strategy.note {
            lines.push(format!("Note: {}", note));
        }
        lines.push(String::new());
    }

    lines.extend([rule(), "END OF REPORT".to_string(), rule()]);
    lines.join("\n")
}

/// Render a validation outcome as a check mark line followed by error and warning lists.
pub fn render_validation(result: &ValidationResult) -> String {
    let mut out = String::new();
    if result.valid {
        let _ = writeln!(out, "✓ Valid AgentFacts schema");
    } else {
        let _ = writeln!(out, "✗ Invalid AgentFacts schema");
    }

    if !result.errors.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Errors:");
        for error in &result.errors {
            let _ = writeln!(out, "  - {}", error);
        }
    }

    if !result.warnings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Warnings:");
        for warning in &result.warnings {
            let _ = writeln!(out, "  - {}", warning);
        }
    }
    out
}
