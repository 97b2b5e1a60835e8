// ABOUTME: GEO auditor combining technical, content, AgentFacts and strategy checks for one page.
// ABOUTME: Fetches the page once as an AI crawler and assembles the selected report sections.

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use clap::ValueEnum;
use geolens_core::{
    assess_discovery_strategy, audit_content, score_technical, ContentAudit, DiscoveryStrategy,
    TechnicalInput, TechnicalMetrics,
};
use geolens_fetch::{count_tags, visible_text, AgentFactsCheck, Client, FetchError};
use scraper::Html;
use serde::Serialize;
use url::Url;

use crate::args::NetworkArgs;

pub const CRAWLER_USER_AGENT: &str = "ClaudeBot/1.0 (compatible; AI-Search-Crawler)";
pub const CRAWLER_ACCEPT: &str = "text/html,application/xhtml+xml";
pub const CRAWLER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Which sections an audit produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AuditMode {
    #[default]
    Full,
    Technical,
    Content,
    Agent,
}

impl AuditMode {
    pub fn includes_technical(self) -> bool {
        matches!(self, AuditMode::Full | AuditMode::Technical)
    }

    pub fn includes_content(self) -> bool {
        matches!(self, AuditMode::Full | AuditMode::Content)
    }

    pub fn includes_agent(self) -> bool {
        matches!(self, AuditMode::Full | AuditMode::Agent)
    }

    pub fn includes_strategy(self) -> bool {
        self == AuditMode::Full
    }
}

/// A completed audit. Sections not selected by the mode are absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub url: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical: Option<TechnicalMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentAudit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_facts: Option<AgentFactsCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<DiscoveryStrategy>,
}

/// Build the client an audit fetches with.
pub fn crawler_client(network: &NetworkArgs) -> Result<Client, FetchError> {
    network
        .client_builder(geolens_fetch::DEFAULT_TIMEOUT)
        .user_agent(CRAWLER_USER_AGENT)
        .header("Accept", CRAWLER_ACCEPT)
        .header("Accept-Language", CRAWLER_ACCEPT_LANGUAGE)
        .build()
}

/// Audits one page. Holds the fetched markup and its visible text.
pub struct GeoAuditor {
    client: Client,
    url: String,
    domain: String,
    launch_year: Option<i32>,
    raw_html: String,
    text: String,
    script_count: usize,
}

impl GeoAuditor {
    /// Fetch `url` and prepare it for auditing.
    pub fn fetch(client: Client, url: &str, launch_year: Option<i32>) -> Result<Self, FetchError> {
        let page = client.fetch_page(url)?;
        Ok(Self::from_html(client, url, launch_year, page.raw_html))
    }

    /// Audit markup that was already retrieved from `url`.
    pub fn from_html(client: Client, url: &str, launch_year: Option<i32>, raw_html: String) -> Self {
        let doc = Html::parse_document(&raw_html);
        let text = visible_text(&doc);
        let script_count = count_tags(&doc, "script");
        Self {
            client,
            url: url.to_string(),
            domain: host_with_port(url),
            launch_year,
            raw_html,
            text,
            script_count,
        }
    }

    /// The host (and port, when explicit) the page was served from.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn audit_technical(&self) -> TechnicalMetrics {
        score_technical(&TechnicalInput::from_page(
            &self.raw_html,
            &self.text,
            self.script_count,
        ))
    }

    pub fn audit_content(&self) -> ContentAudit {
        audit_content(&self.text)
    }

    pub fn check_agent_facts(&self) -> AgentFactsCheck {
        self.client.check_agent_facts(&self.domain)
    }

    pub fn assess_discovery_strategy(&self, current_year: i32) -> DiscoveryStrategy {
        assess_discovery_strategy(self.launch_year, current_year)
    }

    /// Run the sections selected by `mode`, stamping the report with `now`.
    pub fn run(&self, mode: AuditMode, now: DateTime<Utc>) -> AuditReport {
        tracing::debug!(url = %self.url, ?mode, "running audit");
        AuditReport {
            url: self.url.clone(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            technical: mode.includes_technical().then(|| self.audit_technical()),
            content: mode.includes_content().then(|| self.audit_content()),
            agent_facts: mode.includes_agent().then(|| self.check_agent_facts()),
            strategy: mode
                .includes_strategy()
                .then(|| self.assess_discovery_strategy(now.year())),
        }
    }
}

fn host_with_port(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return String::new();
    };
    match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use httpmock::prelude::*;
    use pretty_assertions::assert_eq;

    const PAGE: &str = "<html><head><script>track()</script></head>\
        <body><p>It might work, however results could be mixed.</p></body></html>";

    fn local_client() -> Client {
        crawler_client(&NetworkArgs {
            allow_private_networks: true,
            timeout_secs: None,
        })
        .unwrap()
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn mode_sections() {
        assert!(AuditMode::Full.includes_strategy());
        assert!(!AuditMode::Agent.includes_strategy());
        assert!(AuditMode::Technical.includes_technical());
        assert!(!AuditMode::Technical.includes_content());
        assert!(AuditMode::Content.includes_content());
        assert!(!AuditMode::Content.includes_agent());
    }

    #[test]
    fn domain_keeps_explicit_port() {
        assert_eq!(host_with_port("https://example.com/a"), "example.com");
        assert_eq!(host_with_port("http://127.0.0.1:8080/x"), "127.0.0.1:8080");
        assert_eq!(host_with_port("not a url"), "");
    }

    #[test]
    fn technical_and_content_sections() {
        let auditor = GeoAuditor::from_html(
            local_client(),
            "https://example.com/post",
            None,
            PAGE.to_string(),
        );
        let report = auditor.run(AuditMode::Technical, fixed_now());
        let technical = report.technical.unwrap();
        assert_eq!(technical.script_count, 1);
        assert_eq!(technical.html_size_bytes, PAGE.len());
        assert!(report.content.is_none());
        assert!(report.agent_facts.is_none());
        assert!(report.strategy.is_none());
        assert_eq!(report.timestamp, "2026-03-14T09:26:53Z");

        let content = auditor.audit_content();
        assert_eq!(content.word_count, 8);
        assert_eq!(content.hedge_count, 3);
        assert_eq!(content.hedge_examples, vec!["might", "could be", "however"]);
    }

    #[test]
    fn strategy_uses_report_year() {
        let auditor = GeoAuditor::from_html(
            local_client(),
            "https://example.com/",
            Some(2024),
            PAGE.to_string(),
        );
        let strategy = auditor.assess_discovery_strategy(2026);
        assert_eq!(strategy.status, "Established (2-5 years)");
    }

    #[test]
    fn fetch_sends_crawler_headers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/")
                .header("user-agent", CRAWLER_USER_AGENT)
                .header("accept", CRAWLER_ACCEPT)
                .header("accept-language", CRAWLER_ACCEPT_LANGUAGE);
            then.status(200).body(PAGE);
        });

        let auditor = GeoAuditor::fetch(local_client(), &server.url("/"), None).unwrap();
        mock.assert();
        assert_eq!(auditor.domain(), format!("127.0.0.1:{}", server.port()));
        assert_eq!(auditor.audit_technical().script_count, 1);
    }

    #[test]
    fn fetch_failure_is_reported() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/down");
            then.status(502);
        });

        let result = GeoAuditor::fetch(local_client(), &server.url("/down"), None);
        assert!(result.is_err());
    }
}
