//! store/scan — multi-row reads: catalogue and search.

use anyhow::Result;
use log::info;
use rusqlite::params;

use super::{Snippet, SnippetStore};

impl SnippetStore {
    /// Every row, ascending by keyword. Empty vector when the table is empty.
    pub fn catalogue(&self) -> Result<Vec<Snippet>> {
        info!("retrieving catalogue");
        let mut stmt = self
            .conn
            .prepare("SELECT keyword, message FROM snippets ORDER BY keyword ASC")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Snippet {
                    keyword: row.get(0)?,
                    message: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Rows whose message contains `text` as a case-sensitive substring,
    /// ascending by keyword.
    ///
    /// The needle is a bound parameter to `instr`, so quotes and LIKE
    /// metacharacters in `text` are ordinary characters.
    pub fn search(&self, text: &str) -> Result<Vec<Snippet>> {
        info!("searching snippets for {text:?}");
        let mut stmt = self.conn.prepare(
            "SELECT keyword, message FROM snippets
             WHERE instr(message, ?1) > 0 ORDER BY keyword ASC",
        )?;
        let rows = stmt
            .query_map(params![text], |row| {
                Ok(Snippet {
                    keyword: row.get(0)?,
                    message: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
