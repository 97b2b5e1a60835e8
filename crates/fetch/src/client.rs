// ABOUTME: The blocking Client that fetches pages for hedge analysis and site audits.
// ABOUTME: Wraps reqwest with a redirect policy that refuses private-network hops.

use std::time::Duration;

use scraper::Html;

use crate::error::FetchError;
use crate::extract::main_text;
use crate::options::{ClientBuilder, Options};
use crate::resource::{fetch, resolves_to_private, FetchOptions, FetchResult};

const MAX_REDIRECTS: usize = 10;

/// A fetched HTML page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// The URL that was requested.
    pub url: String,
    /// The URL after redirects.
    pub final_url: String,
    pub raw_html: String,
}

impl Page {
    pub fn document(&self) -> Html {
        Html::parse_document(&self.raw_html)
    }
}

/// HTTP client carrying the configured user agent, timeout and headers.
#[derive(Debug, Clone)]
pub struct Client {
    opts: Options,
    http_client: reqwest::blocking::Client,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn new(opts: Options) -> Result<Self, FetchError> {
        let allow_private = opts.allow_private_networks;
        let redirect_policy = reqwest::redirect::Policy::custom(move |attempt| {
            if attempt.previous().len() >= MAX_REDIRECTS {
                return attempt.error("too many redirects");
            }
            if !allow_private {
                match resolves_to_private(attempt.url()) {
                    Ok(false) => {}
                    Ok(true) => return attempt.error("redirect to private IP blocked"),
                    Err(_) => return attempt.error("DNS lookup failed during redirect"),
                }
            }
            attempt.follow()
        });

        let http_client = reqwest::blocking::Client::builder()
            .redirect(redirect_policy)
            .user_agent(&opts.user_agent)
            .timeout(opts.timeout)
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| {
                FetchError::fetch("", "BuildClient", Some(anyhow::anyhow!("{}", e)))
            })?;

        Ok(Self { opts, http_client })
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Fetch options seeded from the client configuration.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            headers: self.opts.headers.clone(),
            allow_private_networks: self.opts.allow_private_networks,
            parse_non_200: false,
            timeout: None,
        }
    }

    /// Fetch `url`, failing on non-2xx responses.
    pub fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        self.fetch_with(url, &self.fetch_options())
    }

    pub fn fetch_with(&self, url: &str, opts: &FetchOptions) -> Result<FetchResult, FetchError> {
        fetch(&self.http_client, url, opts)
    }

    /// Like [`Client::fetch_with`] but with a per-request timeout and non-2xx
    /// responses returned to the caller.
    pub fn fetch_with_timeout(
        &self,
        url: &str,
        timeout: Duration,
    ) -> Result<FetchResult, FetchError> {
        let opts = FetchOptions {
            parse_non_200: true,
            timeout: Some(timeout),
            ..self.fetch_options()
        };
        self.fetch_with(url, &opts)
    }

    /// Fetch an HTML page and decode it to text.
    pub fn fetch_page(&self, url: &str) -> Result<Page, FetchError> {
        let result = self.fetch(url)?;
        let raw_html = result.text_utf8(None);
        tracing::info!(url, final_url = %result.final_url, bytes = result.body.len(), "fetched page");
        Ok(Page {
            url: result.url,
            final_url: result.final_url,
            raw_html,
        })
    }

    /// Fetch a page and return its main readable text.
    pub fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let page = self.fetch_page(url)?;
        Ok(main_text(&page.document()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use pretty_assertions::assert_eq;

    fn local_client() -> Client {
        Client::builder()
            .allow_private_networks(true)
            .user_agent("test-agent")
            .build()
            .unwrap()
    }

    #[test]
    fn fetch_text_uses_main_content() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/article");
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body(
                    "<html><body><nav>Menu maybe</nav><main><p>It might rain.</p>\
                     <script>var x;</script><p>Bring a coat.</p></main>\
                     <footer>Footer</footer></body></html>",
                );
        });

        let text = local_client().fetch_text(&server.url("/article")).unwrap();
        assert_eq!(text, "It might rain. Bring a coat.");
    }

    #[test]
    fn fetch_sends_user_agent_and_default_headers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/ua")
                .header("user-agent", "test-agent")
                .header("accept", "text/html");
            then.status(200).body("<p>ok</p>");
        });

        let client = Client::builder()
            .allow_private_networks(true)
            .user_agent("test-agent")
            .header("Accept", "text/html")
            .build()
            .unwrap();
        let page = client.fetch_page(&server.url("/ua")).unwrap();
        mock.assert();
        assert_eq!(page.raw_html, "<p>ok</p>");
    }

    #[test]
    fn fetch_page_reports_http_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/gone");
            then.status(500);
        });

        let err = local_client().fetch_page(&server.url("/gone")).unwrap_err();
        assert!(err.is_fetch());
        assert!(err.to_string().contains("HTTP status 500"));
    }

    #[test]
    fn fetch_with_timeout_returns_non_200() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404);
        });

        let result = local_client()
            .fetch_with_timeout(&server.url("/missing"), Duration::from_secs(5))
            .unwrap();
        assert_eq!(result.status, 404);
    }

    #[test]
    fn follows_redirects_when_private_allowed() {
        let server = MockServer::start();
        let target = server.url("/final");
        server.mock(|when, then| {
            when.method(GET).path("/start");
            then.status(302).header("Location", &target);
        });
        server.mock(|when, then| {
            when.method(GET).path("/final");
            then.status(200).body("<main>done</main>");
        });

        let page = local_client().fetch_page(&server.url("/start")).unwrap();
        assert_eq!(page.final_url, target);
        assert_eq!(page.url, server.url("/start"));
    }

    #[test]
    fn default_client_blocks_loopback() {
        let server = MockServer::start();
        let client = Client::builder().build().unwrap();
        let err = client.fetch_page(&server.url("/")).unwrap_err();
        assert!(err.is_ssrf());
    }
}
