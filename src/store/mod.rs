//! store — facade over the `snippets` table.
//!
//! Layout:
//! - mod.rs: types, open/migrate.
//! - kv.rs: single-row operations (put/get/delete).
//! - scan.rs: multi-row reads (catalogue/search).

mod kv;
mod scan;

use anyhow::Result;
use log::debug;
use rusqlite::Connection;
use std::path::Path;

/// One stored row: a keyword and the message it names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snippet {
    pub keyword: String,
    pub message: String,
}

/// Snippet store over a single SQLite connection.
///
/// The connection is injected at construction and held for the process
/// lifetime. No pooling, no reconnect.
#[derive(Debug)]
pub struct SnippetStore {
    conn: Connection,
}

impl SnippetStore {
    /// Open (or create) a file-backed store and ensure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        debug!("connecting to {}", path.as_ref().display());
        let conn = Connection::open(path.as_ref())?;
        let store = Self { conn };
        store.migrate()?;
        debug!("database connection established");
        Ok(store)
    }

    /// In-memory store; used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;

            CREATE TABLE IF NOT EXISTS snippets (
              keyword TEXT PRIMARY KEY,
              message TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }
}
