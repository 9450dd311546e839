//! Crawler module
//!
//! This module contains the core crawling logic, including:
//! - The FIFO frontier queue and the visited-URL registry
//! - Content extraction (links, title, visible text)
//! - The page fetch capability and its HTTP implementation
//! - The breadth-first crawl driver

mod driver;
mod extract;
mod fetcher;
mod frontier;
mod visited;

pub use driver::{CrawlSummary, CrawledPage, Crawler};
pub use extract::{extract_links, extract_text, extract_title};
pub use fetcher::{build_http_client, FetchedPage, HttpFetcher, PageFetcher};
pub use frontier::Frontier;
pub use visited::VisitedSet;

use crate::config::Config;
use crate::storage::SqliteStore;
use crate::Result;
use std::path::Path;

/// Runs a complete crawl described by `config`
///
/// Builds the HTTP fetcher and the SQLite sink, then drives the
/// breadth-first loop from the configured seed URL until the page limit is
/// reached or the frontier drains.
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlSummary)` - Crawl finished; summary of what was covered
/// * `Err(CrawlError)` - Startup or sink failure
pub async fn crawl(config: &Config) -> Result<CrawlSummary> {
    let fetcher = HttpFetcher::from_config(&config.user_agent).map_err(|source| {
        crate::CrawlError::Fetch {
            url: config.crawler.seed_url.clone(),
            source,
        }
    })?;

    let mut store = SqliteStore::new(Path::new(&config.output.database_path))?;

    let crawler = Crawler::new(fetcher, config.crawler.page_limit);
    let summary = crawler.run(&config.crawler.seed_url, &mut store).await?;

    tracing::info!(
        "Crawl finished: {} pages, {} URLs seen, {} left in frontier",
        summary.pages_crawled,
        summary.urls_seen,
        summary.frontier_remaining
    );

    Ok(summary)
}
