use anyhow::Result;

use snipstore::SnippetStore;

use super::DB_PATH;

pub fn exec(name: String) -> Result<()> {
    let mut store = SnippetStore::open(DB_PATH)?;
    if store.delete(&name)? {
        println!("Deleted snippet: '{}'", name);
    } else {
        // Deleting an absent keyword is not an error; report and exit 0.
        println!("404: Snippet not in table");
    }
    Ok(())
}
