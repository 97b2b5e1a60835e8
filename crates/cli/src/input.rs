// ABOUTME: Resolves the text to analyze from a URL, a file or an inline argument.
// ABOUTME: URL sources are fetched and reduced to their main readable text.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use geolens_fetch::DEFAULT_TIMEOUT;

use crate::args::NetworkArgs;

pub const HEDGE_USER_AGENT: &str = "Mozilla/5.0 (compatible; HedgeAnalyzer/1.0)";

/// Where the analyzed text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Url(String),
    Text(String),
    File(PathBuf),
}

pub fn load_text(source: &TextSource, network: &NetworkArgs) -> Result<String> {
    match source {
        TextSource::Text(text) => Ok(text.clone()),
        TextSource::File(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        TextSource::Url(url) => {
            let client = network
                .client_builder(DEFAULT_TIMEOUT)
                .user_agent(HEDGE_USER_AGENT)
                .build()?;
            Ok(client.fetch_text(url)?)
        }
    }
}
