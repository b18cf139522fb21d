//! store/kv — single-row operations: put, get, delete.

use anyhow::Result;
use log::{debug, info};
use rusqlite::{params, OptionalExtension};

use super::SnippetStore;

impl SnippetStore {
    /// Store `snippet` under `name`. If the keyword already exists, its
    /// message is replaced (one atomic upsert, not insert-then-update).
    pub fn put(&mut self, name: &str, snippet: &str) -> Result<()> {
        info!("storing snippet {name:?}: {snippet:?}");
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO snippets (keyword, message) VALUES (?1, ?2)
             ON CONFLICT(keyword) DO UPDATE SET message = excluded.message",
            params![name, snippet],
        )?;
        tx.commit()?;
        debug!("snippet stored");
        Ok(())
    }

    /// Message stored under `name`, or `None` when the keyword is absent.
    pub fn get(&self, name: &str) -> Result<Option<String>> {
        info!("retrieving snippet {name:?}");
        let row = self
            .conn
            .query_row(
                "SELECT message FROM snippets WHERE keyword = ?1",
                params![name],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(row)
    }

    /// Delete the row for `name`. Returns whether a row existed.
    pub fn delete(&mut self, name: &str) -> Result<bool> {
        info!("deleting snippet {name:?}");
        let tx = self.conn.transaction()?;
        let affected = tx.execute("DELETE FROM snippets WHERE keyword = ?1", params![name])?;
        tx.commit()?;
        debug!("delete affected {affected} row(s)");
        Ok(affected > 0)
    }
}
