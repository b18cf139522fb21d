use snipstore::Snippet;

/// Keyword column never narrower than this.
const MIN_KEYWORD_WIDTH: usize = 10;

/// Print rows as two left-aligned columns, keyword column sized to the
/// longest keyword.
pub fn print_rows(rows: &[Snippet]) {
    let width = rows
        .iter()
        .map(|s| s.keyword.len())
        .max()
        .unwrap_or(0)
        .max(MIN_KEYWORD_WIDTH);
    for s in rows {
        println!("{:<width$} {}", s.keyword, s.message, width = width);
    }
}
