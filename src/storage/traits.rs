//! Sink trait and error types
//!
//! The crawl driver hands each successfully crawled page to a [`PageSink`].
//! The production sink persists to SQLite; tests substitute an in-memory
//! collector.

use crate::crawler::CrawledPage;
use thiserror::Error;

/// Errors that can occur while recording crawled pages
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;

/// Capability for persisting crawled pages
///
/// One call per successfully crawled page, in crawl order. Implementations
/// own durability; the driver owns nothing beyond the handoff.
pub trait PageSink {
    /// Records one crawled page
    fn record(&mut self, page: &CrawledPage) -> SinkResult<()>;
}
