//! Storage module for persisting crawl results
//!
//! This module owns the sink side of the crawler: the [`PageSink`]
//! capability the driver hands crawled pages to, and its SQLite-backed
//! production implementation. Only results are persisted here; crawl state
//! (frontier, visited registry) is per-session by design.

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteStore;
pub use traits::{PageSink, SinkError, SinkResult};
