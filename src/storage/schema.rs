//! Database schema definitions
//!
//! This module contains all SQL schema definitions for the Fathom database.

/// SQL schema for the database
pub const SCHEMA_SQL: &str = r#"
-- One row per successfully crawled page
CREATE TABLE IF NOT EXISTS pages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    crawl_index INTEGER NOT NULL,
    url TEXT NOT NULL,
    title TEXT,
    body_text TEXT NOT NULL,
    link_count INTEGER NOT NULL,
    crawled_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_pages_url ON pages(url);

-- Outbound links discovered on each crawled page
CREATE TABLE IF NOT EXISTS page_links (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    page_id INTEGER NOT NULL REFERENCES pages(id),
    target_url TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_page_links_page ON page_links(page_id);
CREATE INDEX IF NOT EXISTS idx_page_links_target ON page_links(target_url);
"#;

/// Initializes the database schema
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_initializes() {
        let conn = Connection::open_in_memory().unwrap();
        let result = initialize_schema(&conn);
        assert!(result.is_ok());
    }

    #[test]
    fn test_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        // Initialize twice
        initialize_schema(&conn).unwrap();
        let result = initialize_schema(&conn);

        // Should succeed the second time too
        assert!(result.is_ok());
    }

    #[test]
    fn test_tables_exist_after_init() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();

        for table in ["pages", "page_links"] {
            let count: Result<i64, _> = conn.query_row(
                &format!(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='{}'",
                    table
                ),
                [],
                |row| row.get(0),
            );
            assert!(count.is_ok());
            assert_eq!(count.unwrap(), 1, "Table {} should exist", table);
        }
    }
}
