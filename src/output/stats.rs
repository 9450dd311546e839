//! Statistics generation from the crawl database
//!
//! This module provides functionality for extracting and displaying
//! crawl statistics from the page store.

use crate::storage::SqliteStore;
use crate::Result;

/// Crawl statistics summary
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    /// Total number of pages recorded
    pub total_pages: u64,

    /// Total number of outbound link edges recorded
    pub total_links: u64,

    /// Pages that carried a title
    pub titled_pages: u64,

    /// Most recently crawled pages: (crawl index, url, title)
    pub recent: Vec<(u32, String, Option<String>)>,
}

/// Loads statistics from the page store
pub fn load_statistics(store: &SqliteStore) -> Result<CrawlStatistics> {
    let total_pages = store.count_pages()?;
    let total_links = store.count_links()?;
    let titled_pages = store.count_titled_pages()?;
    let recent = store.recent_pages(10)?;

    Ok(CrawlStatistics {
        total_pages,
        total_links,
        titled_pages,
        recent,
    })
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  Pages crawled: {}", stats.total_pages);
    println!("  Links discovered: {}", stats.total_links);

    let titled_pct = if stats.total_pages > 0 {
        (stats.titled_pages as f64 / stats.total_pages as f64) * 100.0
    } else {
        0.0
    };
    println!(
        "  Pages with a title: {} ({:.1}%)",
        stats.titled_pages, titled_pct
    );
    println!();

    if !stats.recent.is_empty() {
        println!("Most recent pages:");
        for (index, url, title) in &stats.recent {
            match title {
                Some(title) => println!("  {:>5}  {}  ({})", index, url, title),
                None => println!("  {:>5}  {}", index, url),
            }
        }
    }
}
