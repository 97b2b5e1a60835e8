// ABOUTME: AgentFacts document generator with domain-derived defaults.
// ABOUTME: Builds the typed schema; only the created/modified timestamps depend on the clock.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{NANDA_CONTEXT, NANDA_ID_PREFIX};

pub const SCHEMA_VERSION: &str = "1.0.0";
pub const DEFAULT_TTL_SECS: u64 = 86_400;
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
pub const DEFAULT_CERTIFICATION: &str = "self-attested";

/// Level of human oversight declared in the trust block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HumanOversight {
    #[default]
    #[serde(rename = "true")]
    Enabled,
    #[serde(rename = "false")]
    Disabled,
    #[serde(rename = "on-request")]
    OnRequest,
}

impl HumanOversight {
    pub fn as_str(&self) -> &'static str {
        match self {
            HumanOversight::Enabled => "true",
            HumanOversight::Disabled => "false",
            HumanOversight::OnRequest => "on-request",
        }
    }
}

impl fmt::Display for HumanOversight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HumanOversight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(HumanOversight::Enabled),
            "false" => Ok(HumanOversight::Disabled),
            "on-request" => Ok(HumanOversight::OnRequest),
            other => Err(format!(
                "invalid human oversight level '{}': expected true, false or on-request",
                other
            )),
        }
    }
}

/// Inputs for generating an AgentFacts document. Unset fields fall back to
/// defaults derived from the domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub domain: String,
    pub agent_name: Option<String>,
    pub description: Option<String>,
    pub capabilities: Option<Vec<String>>,
    pub auth_methods: Option<Vec<String>>,
    pub endpoints: Option<Vec<String>>,
    pub human_oversight: HumanOversight,
}

impl GenerateOptions {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    #[serde(rename = "static")]
    pub static_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authentication {
    pub methods: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub modalities: Vec<String>,
    pub authentication: Authentication,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trust {
    pub certification: String,
    pub human_oversight: HumanOversight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub created: String,
    pub modified: String,
    pub ttl: u64,
}

/// A NANDA AgentFacts document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentFactsSchema {
    #[serde(rename = "@context")]
    pub context: String,
    pub id: String,
    /// Agent URN, `urn:agent:` followed by the colon-separated domain.
    pub agent_name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub homepage: String,
    pub endpoints: Endpoints,
    pub capabilities: Capabilities,
    pub trust: Trust,
    pub metadata: Metadata,
    /// Human-readable agent name. Not part of the published document.
    #[serde(skip)]
    pub display_name: String,
}

impl AgentFactsSchema {
    /// Serialize as pretty-printed JSON, or compact JSON when `minify` is set.
    pub fn to_json(&self, minify: bool) -> serde_json::Result<String> {
        if minify {
            serde_json::to_string(self)
        } else {
            serde_json::to_string_pretty(self)
        }
    }
}

/// Generate an AgentFacts document stamped with the current UTC time.
pub fn generate(opts: &GenerateOptions) -> AgentFactsSchema {
    generate_at(opts, Utc::now())
}

/// Generate an AgentFacts document stamped with `now`.
///
/// No validation happens here; malformed domains and unknown capability
/// values are written as given.
pub fn generate_at(opts: &GenerateOptions, now: DateTime<Utc>) -> AgentFactsSchema {
    let domain = opts.domain.as_str();
    let display_name = opts
        .agent_name
        .clone()
        .unwrap_or_else(|| title_case(&domain.replace('.', " ")));

    let endpoints = match &opts.endpoints {
        Some(urls) if !urls.is_empty() => urls.clone(),
        _ => vec![format!("https://api.{}/v1/agent", domain)],
    };

    let timestamp = now.format(TIMESTAMP_FORMAT).to_string();

    AgentFactsSchema {
        context: NANDA_CONTEXT.to_string(),
        id: format!("{}{}", NANDA_ID_PREFIX, domain),
        agent_name: format!("urn:agent:{}", domain.replace('.', ":")),
        version: SCHEMA_VERSION.to_string(),
        description: opts.description.clone().filter(|d| !d.is_empty()),
        homepage: format!("https://{}", domain),
        endpoints: Endpoints {
            static_urls: endpoints,
        },
        capabilities: Capabilities {
            modalities: opts
                .capabilities
                .clone()
                .unwrap_or_else(|| vec!["text".to_string()]),
            authentication: Authentication {
                methods: opts
                    .auth_methods
                    .clone()
                    .unwrap_or_else(|| vec!["none".to_string()]),
            },
        },
        trust: Trust {
            certification: DEFAULT_CERTIFICATION.to_string(),
            human_oversight: opts.human_oversight,
        },
        metadata: Metadata {
            created: timestamp.clone(),
            modified: timestamp,
            ttl: DEFAULT_TTL_SECS,
        },
        display_name,
    }
}

/// Uppercase the first letter of every alphabetic run and lowercase the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
