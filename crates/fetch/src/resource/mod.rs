// ABOUTME: Resource handling module for fetching web pages and documents.
// ABOUTME: Handles blocking HTTP fetching with private-network guards, size limits, and charset decoding.

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, ToSocketAddrs};
use std::time::Duration;

use bytes::Bytes;
use ipnet::{Ipv4Net, Ipv6Net};
use url::Url;

use crate::error::FetchError;

/// Maximum allowed content length (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

const PRIVATE_V4_RANGES: &[(Ipv4Addr, u8)] = &[
    // RFC1918
    (Ipv4Addr::new(10, 0, 0, 0), 8),
    (Ipv4Addr::new(172, 16, 0, 0), 12),
    (Ipv4Addr::new(192, 168, 0, 0), 16),
    // Loopback
    (Ipv4Addr::new(127, 0, 0, 0), 8),
    // Link-local
    (Ipv4Addr::new(169, 254, 0, 0), 16),
];

const PRIVATE_V6_RANGES: &[(Ipv6Addr, u8)] = &[
    // Unique local
    (Ipv6Addr::new(0xfc00, 0, 0, 0, 0, 0, 0, 0), 7),
    // Link-local
    (Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 0), 10),
];

/// Options for fetching a resource.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub headers: HashMap<String, String>,
    pub allow_private_networks: bool,
    /// Return non-2xx responses instead of failing.
    pub parse_non_200: bool,
    /// Per-request timeout overriding the client's.
    pub timeout: Option<Duration>,
}

/// Result of a successful fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub url: String,
    pub final_url: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    /// Decode the body as UTF-8 text, using charset hints from content-type header.
    pub fn text_utf8(&self, content_type_hint: Option<&str>) -> String {
        let ct = content_type_hint.or(self.content_type.as_deref());
        decode_body(&self.body, ct)
    }

    /// Decode the body and parse it as JSON.
    pub fn json(&self) -> Result<serde_json::Value, FetchError> {
        serde_json::from_str(&self.text_utf8(None)).map_err(|e| {
            FetchError::parse(
                &self.url,
                "ParseJson",
                Some(anyhow::anyhow!("invalid JSON: {}", e)),
            )
        })
    }

    /// Returns true for 2xx responses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Check if an IP address is in a private/reserved range.
pub(crate) fn is_private_ip(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V4(ip) => PRIVATE_V4_RANGES
            .iter()
            .any(|&(net, len)| Ipv4Net::new(net, len).is_ok_and(|n| n.contains(ip))),
        IpAddr::V6(ip) => {
            ip.is_loopback()
                || PRIVATE_V6_RANGES
                    .iter()
                    .any(|&(net, len)| Ipv6Net::new(net, len).is_ok_and(|n| n.contains(ip)))
        }
    }
}

/// Returns true when `target` is, or resolves to, a private address.
///
/// Resolution failures are reported as errors rather than treated as public.
pub(crate) fn resolves_to_private(target: &Url) -> Result<bool, std::io::Error> {
    let Some(host) = target.host_str() else {
        return Ok(false);
    };
    let host = host.trim_start_matches('[').trim_end_matches(']');
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(is_private_ip(&ip));
    }
    let port = target.port_or_known_default().unwrap_or(80);
    let addrs = (host, port).to_socket_addrs()?;
    Ok(addrs.into_iter().any(|sa| is_private_ip(&sa.ip())))
}

/// Fail with an SSRF error when `target` points into a private network.
fn ensure_public(target: &Url, url: &str, what: &str) -> Result<(), FetchError> {
    match resolves_to_private(target) {
        Ok(false) => Ok(()),
        Ok(true) => Err(FetchError::ssrf(
            url,
            "Fetch",
            Some(anyhow::anyhow!("{} private IP address is not allowed", what)),
        )),
        Err(e) => Err(FetchError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("DNS lookup failed: {}", e)),
        )),
    }
}

/// Decode body bytes to a String using charset from content-type header or detection.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    // Try to extract charset from content-type header
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    // Use chardetng for detection
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract charset value from Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            // Remove quotes if present
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}

/// Fetch a resource from the given URL with a single attempt.
pub fn fetch(
    client: &reqwest::blocking::Client,
    url: &str,
    opts: &FetchOptions,
) -> Result<FetchResult, FetchError> {
    if url.is_empty() {
        return Err(FetchError::invalid_url(url, "Fetch", None));
    }

    let parsed_url = Url::parse(url).map_err(|e| {
        FetchError::invalid_url(url, "Fetch", Some(anyhow::anyhow!("invalid URL: {}", e)))
    })?;

    let scheme = parsed_url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(FetchError::invalid_url(
            url,
            "Fetch",
            Some(anyhow::anyhow!("scheme must be http or https")),
        ));
    }

    if !opts.allow_private_networks {
        ensure_public(&parsed_url, url, "requests to")?;
    }

    let mut request = client.get(url);
    for (key, value) in &opts.headers {
        request = request.header(key, value);
    }
    if let Some(timeout) = opts.timeout {
        request = request.timeout(timeout);
    }

    tracing::debug!(url, "sending request");
    let response = request
        .send()
        .map_err(|e| FetchError::from_reqwest(url, "Fetch", e))?;

    // The redirect policy already screens hops; re-check where we landed.
    if !opts.allow_private_networks {
        ensure_public(response.url(), url, "redirect to")?;
    }

    if let Some(len) = response.content_length() {
        if len as usize > MAX_CONTENT_LENGTH {
            return Err(FetchError::fetch(
                url,
                "Fetch",
                Some(anyhow::anyhow!("content too large")),
            ));
        }
    }

    // Capture response metadata before consuming the response
    let status = response.status().as_u16();
    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    let body = response
        .bytes()
        .map_err(|e| FetchError::from_reqwest(url, "Fetch", e))?;

    if body.len() > MAX_CONTENT_LENGTH {
        return Err(FetchError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("content too large")),
        ));
    }

    tracing::debug!(url, status, bytes = body.len(), "received response");

    let result = FetchResult {
        status,
        url: url.to_string(),
        final_url,
        content_type,
        body,
    };

    if !result.is_success() && !opts.parse_non_200 {
        return Err(FetchError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("HTTP status {}", status)),
        ));
    }

    Ok(result)
}
