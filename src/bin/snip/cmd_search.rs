use anyhow::Result;

use snipstore::SnippetStore;

use super::util::print_rows;
use super::DB_PATH;

pub fn exec(search_text: String) -> Result<()> {
    let store = SnippetStore::open(DB_PATH)?;
    let rows = store.search(&search_text)?;
    if rows.is_empty() {
        println!("404: No snippet found containing '{}'", search_text);
        return Ok(());
    }
    println!("Snippets found:");
    print_rows(&rows);
    Ok(())
}
