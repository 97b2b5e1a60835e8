// ABOUTME: AgentFacts validator applying required-field errors and recommended-field warnings.
// ABOUTME: Works on arbitrary JSON so documents from any publisher can be checked.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{NANDA_ID_PREFIX, NANDA_NAMESPACE_PREFIX};

/// Fields whose absence invalidates a document.
pub const REQUIRED_FIELDS: [&str; 3] = ["@context", "id", "agent_name"];

/// Fields whose absence only produces a warning.
pub const RECOMMENDED_FIELDS: [&str; 3] = ["endpoints", "capabilities", "trust"];

pub const VALID_MODALITIES: [&str; 5] = ["text", "image", "audio", "video", "code"];

pub const VALID_CERTIFICATIONS: [&str; 3] = ["self-attested", "third-party", "audited"];

/// Outcome of validating one AgentFacts document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    /// The validated document, absent when none could be obtained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

impl ValidationResult {
    /// A result for a document that could not be obtained at all.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            errors: vec![error.into()],
            warnings: Vec::new(),
            schema: None,
        }
    }
}

/// Validate an AgentFacts document.
///
/// Warnings never affect `valid`. A document that is not a JSON object is
/// treated as having no fields.
pub fn validate(document: &Value) -> ValidationResult {
    let empty = Map::new();
    let fields = document.as_object().unwrap_or(&empty);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for field in REQUIRED_FIELDS {
        if !fields.contains_key(field) {
            errors.push(format!("Missing required field: {}", field));
        }
    }

    if let Some(context) = fields.get("@context") {
        if !starts_with(context, NANDA_NAMESPACE_PREFIX) {
            errors.push("@context must be a NANDA namespace URI".to_string());
        }
    }

    if let Some(id) = fields.get("id") {
        if !starts_with(id, NANDA_ID_PREFIX) {
            errors.push(format!("id must start with '{}'", NANDA_ID_PREFIX));
        }
    }

    for field in RECOMMENDED_FIELDS {
        if !fields.contains_key(field) {
            warnings.push(format!("Recommended field missing: {}", field));
        }
    }

    if let Some(modalities) = fields
        .get("capabilities")
        .and_then(|caps| caps.get("modalities"))
        .and_then(Value::as_array)
    {
        for modality in modalities {
            if !is_one_of(modality, &VALID_MODALITIES) {
                warnings.push(format!("Unknown modality: {}", display_value(modality)));
            }
        }
    }

    if let Some(certification) = fields.get("trust").and_then(|trust| trust.get("certification")) {
        if !is_one_of(certification, &VALID_CERTIFICATIONS) {
            warnings.push(format!(
                "Unknown certification level: {}",
                display_value(certification)
            ));
        }
    }

    tracing::debug!(
        errors = errors.len(),
        warnings = warnings.len(),
        "validated AgentFacts document"
    );

    ValidationResult {
        valid: errors.is_empty(),
        errors,
        warnings,
        schema: Some(document.clone()),
    }
}

fn starts_with(value: &Value, prefix: &str) -> bool {
    value.as_str().is_some_and(|s| s.starts_with(prefix))
}

fn is_one_of(value: &Value, allowed: &[&str]) -> bool {
    value.as_str().is_some_and(|s| allowed.contains(&s))
}

/// Strings print bare; anything else prints as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agentfacts::generate::{generate, GenerateOptions};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn generated_document_is_valid() {
        let schema = generate(&GenerateOptions::new("example.com"));
        let result = validate(&serde_json::to_value(&schema).unwrap());
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn id_only_document_is_invalid() {
        let result = validate(&json!({"id": "nanda:x"}));
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![
                "Missing required field: @context",
                "Missing required field: agent_name"
            ]
        );
        assert_eq!(
            result.warnings,
            vec![
                "Recommended field missing: endpoints",
                "Recommended field missing: capabilities",
                "Recommended field missing: trust"
            ]
        );
        assert_eq!(result.schema, Some(json!({"id": "nanda:x"})));
    }

    #[test]
    fn wrong_namespace_and_id_prefix() {
        let result = validate(&json!({
            "@context": "https://schema.org",
            "id": "did:web:example.com",
            "agent_name": "urn:agent:example:com"
        }));
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![
                "@context must be a NANDA namespace URI",
                "id must start with 'nanda:'"
            ]
        );
    }

    #[test]
    fn non_string_context_is_an_error() {
        let result = validate(&json!({
            "@context": ["https://nanda.dev/ns/agent-facts/v1"],
            "id": "nanda:example.com",
            "agent_name": "x"
        }));
        assert_eq!(result.errors, vec!["@context must be a NANDA namespace URI"]);
    }

    #[test]
    fn unknown_modality_and_certification_only_warn() {
        let result = validate(&json!({
            "@context": "https://nanda.dev/ns/agent-facts/v1",
            "id": "nanda:example.com",
            "agent_name": "urn:agent:example:com",
            "endpoints": {"static": []},
            "capabilities": {"modalities": ["text", "smell", 7]},
            "trust": {"certification": "vibes"}
        }));
        assert!(result.valid);
        assert_eq!(
            result.warnings,
            vec![
                "Unknown modality: smell",
                "Unknown modality: 7",
                "Unknown certification level: vibes"
            ]
        );
    }

    #[test]
    fn non_object_document_misses_everything() {
        let result = validate(&json!(["@context", "id"]));
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 3);
        assert_eq!(result.warnings.len(), 3);
    }

    #[test]
    fn failure_serializes_without_schema() {
        let json = serde_json::to_value(ValidationResult::failure("HTTP 404")).unwrap();
        assert_eq!(
            json,
            json!({"valid": false, "errors": ["HTTP 404"], "warnings": []})
        );
    }
}
