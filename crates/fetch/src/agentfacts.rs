// ABOUTME: Retrieval of AgentFacts documents from the well-known path and remote validation.
// ABOUTME: Degrades every failure into a reportable outcome instead of an error.

use std::time::Duration;

use geolens_core::agentfacts::validate::{validate, ValidationResult};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::client::Client;

pub const WELL_KNOWN_PATH: &str = "/.well-known/agent-facts";

/// Timeout for the presence check made during an audit.
pub const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for an explicit validation request.
pub const VALIDATE_TIMEOUT: Duration = Duration::from_secs(10);

const PREVIEW_KEYS: usize = 5;

/// Where a site publishes its AgentFacts document.
pub fn well_known_url(domain: &str) -> String {
    format!("https://{}{}", domain, WELL_KNOWN_PATH)
}

/// Presence and validity of a site's AgentFacts document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgentFactsCheck {
    pub present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The first top-level entries of the document, in document order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_preview: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl Client {
    /// Check the well-known AgentFacts location of `domain` (host with optional port).
    pub fn check_agent_facts(&self, domain: &str) -> AgentFactsCheck {
        self.check_agent_facts_at(&well_known_url(domain))
    }

    pub fn check_agent_facts_at(&self, url: &str) -> AgentFactsCheck {
        let response = match self.fetch_with_timeout(url, CHECK_TIMEOUT) {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(url, error = %err, "AgentFacts check failed");
                return AgentFactsCheck {
                    present: false,
                    error: Some("Could not fetch".to_string()),
                    ..Default::default()
                };
            }
        };

        if response.status != 200 {
            return AgentFactsCheck {
                present: false,
                status_code: Some(response.status),
                ..Default::default()
            };
        }

        let document = match response.json() {
            Ok(document) => document,
            Err(_) => {
                return AgentFactsCheck {
                    present: true,
                    valid: Some(false),
                    error: Some("Invalid JSON".to_string()),
                    url: Some(url.to_string()),
                    ..Default::default()
                };
            }
        };

        let result = validate(&document);
        AgentFactsCheck {
            present: true,
            valid: Some(result.valid),
            url: Some(url.to_string()),
            schema_preview: Some(preview(&document)),
            errors: Some(result.errors),
            warnings: Some(result.warnings),
            ..Default::default()
        }
    }

    /// Fetch and validate an AgentFacts document served at `url`.
    pub fn validate_remote(&self, url: &str) -> ValidationResult {
        let response = match self.fetch_with_timeout(url, VALIDATE_TIMEOUT) {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(url, error = %err, "AgentFacts fetch failed");
                return ValidationResult::failure(err.to_string());
            }
        };

        if response.status != 200 {
            return ValidationResult::failure(format!("HTTP {}", response.status));
        }

        match response.json() {
            Ok(document) => {
                let result = validate(&document);
                tracing::info!(url, valid = result.valid, "validated remote AgentFacts");
                result
            }
            Err(_) => ValidationResult::failure("Invalid JSON"),
        }
    }
}

fn preview(document: &Value) -> Map<String, Value> {
    document
        .as_object()
        .map(|fields| {
            fields
                .iter()
                .take(PREVIEW_KEYS)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        })
        .unwrap_or_default()
}
