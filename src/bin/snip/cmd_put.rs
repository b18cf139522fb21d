use anyhow::Result;

use snipstore::SnippetStore;

use super::DB_PATH;

pub fn exec(name: String, snippet: String) -> Result<()> {
    let mut store = SnippetStore::open(DB_PATH)?;
    store.put(&name, &snippet)?;
    println!("Stored '{}' as '{}'", snippet, name);
    Ok(())
}
