//! Fathom: a breadth-first web crawler
//!
//! This crate implements a FIFO breadth-first crawler: starting from a seed
//! URL it fetches pages, extracts outbound links, deduplicates them against
//! a set of normalized URLs, and keeps going until the frontier drains or
//! the configured page budget is spent. Crawled pages are handed to a sink
//! for persistence.

pub mod config;
pub mod crawler;
pub mod output;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for Fathom operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error for {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("Link extraction failed for {url}: {message}")]
    LinkExtraction { url: String, message: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Sink error: {0}")]
    Sink(#[from] storage::SinkError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Fathom operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlSummary, CrawledPage, Crawler, FetchedPage, PageFetcher};
pub use storage::PageSink;
pub use url::normalize_url;
