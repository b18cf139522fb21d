use anyhow::Result;

use snipstore::SnippetStore;

use super::util::print_rows;
use super::DB_PATH;

pub fn exec() -> Result<()> {
    let store = SnippetStore::open(DB_PATH)?;
    let rows = store.catalogue()?;
    if rows.is_empty() {
        println!("404: Snippets table is empty. Try the put command.");
        return Ok(());
    }
    println!("Retrieved catalogue:");
    print_rows(&rows);
    Ok(())
}
