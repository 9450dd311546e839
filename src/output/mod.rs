//! Output module for reporting on crawl results
//!
//! This module handles the read side of the page store: statistics for the
//! `--stats` CLI mode.

pub mod stats;

pub use stats::{load_statistics, print_statistics, CrawlStatistics};
