use anyhow::Result;

use snipstore::SnippetStore;

use super::DB_PATH;

pub fn exec(name: String) -> Result<()> {
    let store = SnippetStore::open(DB_PATH)?;
    match store.get(&name)? {
        Some(message) => println!("Retrieved snippet: '{}'", message),
        None => println!("Retrieved snippet: '404: Snippet Not Found'"),
    }
    Ok(())
}
