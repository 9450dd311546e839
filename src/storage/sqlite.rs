//! SQLite sink implementation
//!
//! This module provides the SQLite-backed implementation of the PageSink
//! capability, plus the read-side queries used by the stats reporting.

use crate::crawler::CrawledPage;
use crate::storage::schema::initialize_schema;
use crate::storage::traits::{PageSink, SinkResult};
use crate::CrawlError;
use chrono::Utc;
use rusqlite::{params, Connection};
use std::path::Path;

/// SQLite storage backend for crawled pages
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (creating if necessary) a page store at `path`
    pub fn new(path: &Path) -> Result<Self, CrawlError> {
        let conn = Connection::open(path)?;

        // Configure SQLite for better performance
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        // Initialize schema
        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory store (for testing)
    #[cfg(test)]
    pub fn new_in_memory() -> Result<Self, CrawlError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Total number of recorded pages
    pub fn count_pages(&self) -> Result<u64, CrawlError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM pages", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Total number of recorded link edges
    pub fn count_links(&self) -> Result<u64, CrawlError> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM page_links", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Number of recorded pages that carried a title
    pub fn count_titled_pages(&self) -> Result<u64, CrawlError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM pages WHERE title IS NOT NULL",
            [],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    /// The most recently crawled pages, newest first
    pub fn recent_pages(&self, limit: u32) -> Result<Vec<(u32, String, Option<String>)>, CrawlError> {
        let mut stmt = self.conn.prepare(
            "SELECT crawl_index, url, title FROM pages ORDER BY crawl_index DESC LIMIT ?1",
        )?;

        let rows = stmt
            .query_map(params![limit], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }
}

impl PageSink for SqliteStore {
    fn record(&mut self, page: &CrawledPage) -> SinkResult<()> {
        let now = Utc::now().to_rfc3339();

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO pages (crawl_index, url, title, body_text, link_count, crawled_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                page.index,
                page.url,
                page.title,
                page.text,
                page.links.len() as i64,
                now
            ],
        )?;
        let page_id = tx.last_insert_rowid();

        for link in &page.links {
            tx.execute(
                "INSERT INTO page_links (page_id, target_url) VALUES (?1, ?2)",
                params![page_id, link],
            )?;
        }
        tx.commit()?;

        Ok(())
    }
}
