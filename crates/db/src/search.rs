//! SQL building blocks for free-text filtering of list queries.
//!
//! A row matches when the lower-cased text of any searchable column
//! contains the search term. Numbers are printed the way the editor prints
//! them (`16`, `1.2`, `1234567`) and flags as `true`/`false`. Creation
//! timestamps are never searchable.
//!
//! SQLite's `lower()` only folds ASCII, so free text is matched against a
//! companion `*_folded` column written through [`fold`] on every insert and
//! update. The term is always bound as parameter `?1` (folded the same way,
//! or `NULL` for "no filter").

/// Case-fold free text for storage in a `*_folded` column.
///
/// Must agree with how the search term is folded in
/// [`PageRequest::search_term`](brandkit_core::pagination::PageRequest::search_term).
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// How a column is turned into text before matching.
#[derive(Debug, Clone, Copy)]
pub enum SearchColumn {
    /// Column already holding [`fold`]ed text.
    Folded(&'static str),
    /// ASCII-only text, lowered by SQLite.
    Text(&'static str),
    Integer(&'static str),
    Real(&'static str),
    Flag(&'static str),
}

impl SearchColumn {
    fn text_expr(self) -> String {
        match self {
            Self::Folded(col) => col.to_string(),
            Self::Text(col) => format!("lower({col})"),
            Self::Integer(col) => format!("CAST({col} AS TEXT)"),
            // 15 significant digits keeps whole numbers out of exponent form.
            Self::Real(col) => format!("printf('%.15g', {col})"),
            Self::Flag(col) => format!("(CASE WHEN {col} THEN 'true' ELSE 'false' END)"),
        }
    }
}

/// Build the `WHERE` predicate for `columns`, matching on bound term `?1`.
pub fn filter_clause(columns: &[SearchColumn]) -> String {
    let matches: Vec<String> = columns
        .iter()
        .map(|c| format!("instr({}, ?1) > 0", c.text_expr()))
        .collect();

    if matches.is_empty() {
        return "?1 IS NULL".to_string();
    }
    format!("(?1 IS NULL OR {})", matches.join(" OR "))
}
