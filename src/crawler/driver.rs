//! Crawl driver - the breadth-first crawl loop
//!
//! The driver owns the loop: pop the next URL from the frontier, gate it
//! through the visited registry, fetch it, enqueue its HTTP(S) links, and
//! hand the page to the sink. Crawl order is strict FIFO with no priority.
//! The loop ends when the configured page budget is spent or the frontier
//! drains; there is no cancellation signal.

use crate::crawler::extract::{extract_text, extract_title};
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::frontier::Frontier;
use crate::crawler::visited::VisitedSet;
use crate::storage::PageSink;
use crate::Result;

/// A successfully crawled page, as handed to the sink
#[derive(Debug, Clone)]
pub struct CrawledPage {
    /// Zero-based crawl position
    pub index: u32,

    /// The URL as it was dequeued
    pub url: String,

    /// First `<title>` text, if any
    pub title: Option<String>,

    /// Flattened visible text, possibly empty
    pub text: String,

    /// Outbound links in document order, duplicates included
    pub links: Vec<String>,
}

/// Outcome of a finished crawl
#[derive(Debug, Clone, Copy)]
pub struct CrawlSummary {
    /// Pages fetched successfully and handed to the sink
    pub pages_crawled: u32,

    /// URLs still queued when the crawl stopped
    pub frontier_remaining: usize,

    /// Distinct normalized URLs seen
    pub urls_seen: usize,
}

/// Breadth-first crawl driver over a fetch capability
pub struct Crawler<F> {
    fetcher: F,
    page_limit: u32,
}

impl<F: PageFetcher> Crawler<F> {
    /// Creates a driver with the given fetcher and page budget
    pub fn new(fetcher: F, page_limit: u32) -> Self {
        Self { fetcher, page_limit }
    }

    /// Runs a crawl from `seed_url` until the budget is spent or the
    /// frontier drains
    ///
    /// Per iteration:
    /// 1. Stop when the budget is spent.
    /// 2. Dequeue; stop when the frontier is empty.
    /// 3. Gate through the visited registry; already-seen URLs are dropped.
    /// 4. Fetch; a failed fetch is logged and skipped without touching the
    ///    budget or enqueueing anything.
    /// 5. Enqueue every discovered `http://`/`https://` link, unchecked;
    ///    deduplication happens at step 3 of a later iteration.
    /// 6. Derive title and text, hand the page to the sink, report
    ///    progress, and count it.
    ///
    /// Frontier and visited registry are created fresh for each run and
    /// discarded with it.
    pub async fn run<S: PageSink>(&self, seed_url: &str, sink: &mut S) -> Result<CrawlSummary> {
        let frontier = Frontier::new();
        let visited = VisitedSet::new();

        frontier.enqueue(seed_url);
        let mut pages_crawled: u32 = 0;

        while pages_crawled < self.page_limit {
            let Some(url) = frontier.dequeue() else {
                break;
            };

            if !visited.visit(&url) {
                continue;
            }

            let page = match self.fetcher.fetch(&url).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", url, e);
                    continue;
                }
            };

            for link in &page.links {
                if is_crawlable(link) {
                    frontier.enqueue(link.clone());
                }
            }

            let html = String::from_utf8_lossy(&page.body);
            let title = extract_title(&html);
            let text = extract_text(&page.body);

            tracing::info!("{}: {}", pages_crawled, url);
            sink.record(&CrawledPage {
                index: pages_crawled,
                url,
                title,
                text,
                links: page.links,
            })?;

            pages_crawled += 1;
        }

        Ok(CrawlSummary {
            pages_crawled,
            frontier_remaining: frontier.len(),
            urls_seen: visited.len(),
        })
    }
}

/// Whether a discovered link is eligible for the frontier
///
/// Only HTTP(S) targets are crawlable; `mailto:`, `javascript:`, `tel:`
/// and the rest never enter the queue.
fn is_crawlable(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}
