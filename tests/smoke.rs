use anyhow::Result;

use snipstore::SnippetStore;

#[test]
fn smoke_put_get_catalogue_search_delete() -> Result<()> {
    let mut store = SnippetStore::open_in_memory()?;

    // 1) put + get round trip
    store.put("recipe", "mix flour and water")?;
    let got = store.get("recipe")?.expect("recipe must exist");
    assert_eq!(got, "mix flour and water");

    // 2) never-written keyword misses
    assert!(store.get("absent")?.is_none());

    // 3) catalogue sees the row
    let rows = store.catalogue()?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].keyword, "recipe");
    assert_eq!(rows[0].message, "mix flour and water");

    // 4) search hit and miss
    let hits = store.search("flour")?;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].keyword, "recipe");
    assert!(store.search("xyz")?.is_empty());

    // 5) delete, then the keyword is gone
    assert!(store.delete("recipe")?, "recipe existed before delete");
    assert!(store.get("recipe")?.is_none());
    assert!(!store.delete("recipe")?, "second delete finds nothing");

    Ok(())
}

#[test]
fn empty_store_reads() -> Result<()> {
    let store = SnippetStore::open_in_memory()?;
    assert!(store.catalogue()?.is_empty());
    assert!(store.search("anything")?.is_empty());
    assert!(store.get("anything")?.is_none());
    Ok(())
}

#[test]
fn message_may_be_empty_or_odd() -> Result<()> {
    let mut store = SnippetStore::open_in_memory()?;
    store.put("blank", "")?;
    store.put("newlines", "line one\nline two")?;

    assert_eq!(store.get("blank")?.as_deref(), Some(""));
    assert_eq!(store.get("newlines")?.as_deref(), Some("line one\nline two"));
    Ok(())
}
