//! Page fetching
//!
//! The crawl driver depends on the narrow [`PageFetcher`] capability: one
//! operation that turns a URL into page bytes plus the outbound links found
//! in them. The production implementation performs an HTTP GET via
//! `reqwest`; tests substitute an in-memory fetcher.

use crate::config::UserAgentConfig;
use crate::crawler::extract::extract_links;
use crate::CrawlError;
use async_trait::async_trait;
use reqwest::Client;

/// A fetched page: raw body bytes and the absolute outbound links found in it
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Raw response body
    pub body: Vec<u8>,

    /// Absolute link targets in document order, duplicates included
    pub links: Vec<String>,
}

/// Capability for retrieving a page and its outbound links
///
/// Any implementation is substitutable for the production HTTP fetcher:
/// a mock, a cached replay, or a recorded corpus. A returned error means
/// "skip this URL": the driver enqueues none of its links and does not
/// count it against the crawl budget.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, CrawlError>;
}

/// Builds the HTTP client used by the production fetcher
///
/// User agent format: `CrawlerName/Version (+ContactURL; ContactEmail)`.
/// Redirect handling stays at the client's defaults, and no request timeout
/// is set: a hanging fetch stalls only the worker that issued it.
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Production fetcher performing HTTP GET requests
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher around an already-built client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Convenience constructor building the client from a user-agent config
    pub fn from_config(config: &UserAgentConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(config)?))
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, CrawlError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| CrawlError::Fetch {
                url: url.to_string(),
                source,
            })?;

        // The final URL after redirects is the base for link resolution
        let base = response.url().clone();

        let body = response
            .bytes()
            .await
            .map_err(|source| CrawlError::Fetch {
                url: url.to_string(),
                source,
            })?
            .to_vec();

        // A link-extraction failure fails the whole fetch; title/text
        // extraction is the driver's fail-soft concern
        let html = String::from_utf8_lossy(&body);
        let links = extract_links(&html, &base).map_err(|message| CrawlError::LinkExtraction {
            url: url.to_string(),
            message,
        })?;

        Ok(FetchedPage { body, links })
    }
}
