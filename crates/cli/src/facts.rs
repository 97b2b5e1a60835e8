// ABOUTME: Helpers behind the agent-facts binary: list parsing and validation targets.
// ABOUTME: HTTP targets are fetched remotely; anything else is read as a local JSON file.

use std::fs;
use std::path::Path;

use geolens_core::{validate, ValidationResult};
use geolens_fetch::{FetchError, DEFAULT_TIMEOUT};

use crate::args::NetworkArgs;

/// Split a comma-separated list, trimming entries and dropping empty ones.
/// Returns None when nothing remains.
pub fn parse_list(raw: Option<&str>) -> Option<Vec<String>> {
    let items: Vec<String> = raw?
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    (!items.is_empty()).then_some(items)
}

fn is_http_target(target: &str) -> bool {
    let lower = target.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Validate the AgentFacts document at `target`, a URL or a file path.
pub fn validate_target(
    target: &str,
    network: &NetworkArgs,
) -> Result<ValidationResult, FetchError> {
    if is_http_target(target) {
        let client = network.client_builder(DEFAULT_TIMEOUT).build()?;
        return Ok(client.validate_remote(target));
    }
    Ok(validate_file(Path::new(target)))
}

pub fn validate_file(path: &Path) -> ValidationResult {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read AgentFacts file");
            return ValidationResult::failure(format!("Could not read {}: {}", path.display(), e));
        }
    };
    match serde_json::from_str(&raw) {
        Ok(document) => validate(&document),
        Err(_) => ValidationResult::failure("Invalid JSON"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn lists_are_trimmed() {
        assert_eq!(
            parse_list(Some("text, image,,code ")),
            Some(vec!["text".to_string(), "image".to_string(), "code".to_string()])
        );
        assert_eq!(parse_list(Some(" , ")), None);
        assert_eq!(parse_list(None), None);
    }

    #[test]
    fn http_targets_are_detected() {
        assert!(is_http_target("https://example.com/.well-known/agent-facts"));
        assert!(is_http_target("HTTP://example.com"));
        assert!(!is_http_target("facts.json"));
        assert!(!is_http_target("./http/facts.json"));
    }

    #[test]
    fn validates_local_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("facts.json");
        fs::write(&path, r#"{"id": "nanda:x"}"#).unwrap();

        let result = validate_target(path.to_str().unwrap(), &NetworkArgs::default()).unwrap();
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![
                "Missing required field: @context",
                "Missing required field: agent_name"
            ]
        );
    }

    #[test]
    fn local_file_with_bad_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("facts.json");
        fs::write(&path, "{ nope").unwrap();

        let result = validate_file(&path);
        assert_eq!(result.errors, vec!["Invalid JSON"]);
    }

    #[test]
    fn missing_file_is_a_failure_result() {
        let result = validate_file(Path::new("/nonexistent/facts.json"));
        assert!(!result.valid);
        assert!(result.errors[0].starts_with("Could not read /nonexistent/facts.json"));
    }
}
