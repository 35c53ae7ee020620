//! Repository layer: one zero-sized repo struct per table with async
//! associated functions taking the pool explicitly.

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};
use brandkit_core::pagination::{PageRequest, PageResult};

use crate::search::{filter_clause, SearchColumn};

pub mod asset_repo;
pub mod color_repo;
pub mod typography_repo;

pub use asset_repo::AssetRepo;
pub use color_repo::ColorRepo;
pub use typography_repo::TypographyRepo;

/// Fetch one page of `table`, filtered by the request's search term.
///
/// Filtering happens before pagination and `total` is the post-filter
/// count. Rows come back in insertion order.
pub(crate) async fn fetch_page<T>(
    pool: &SqlitePool,
    table: &str,
    columns: &str,
    search: &[SearchColumn],
    request: &PageRequest,
) -> Result<PageResult<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let filter = filter_clause(search);
    let term = request.search_term();

    let count_query = format!("SELECT COUNT(*) FROM {table} WHERE {filter}");
    let total = sqlx::query_scalar::<_, i64>(&count_query)
        .bind(term.as_deref())
        .fetch_one(pool)
        .await?;

    if total == 0 {
        return Ok(PageResult::empty(request));
    }
    let Some(offset) = request.offset() else {
        return Ok(PageResult::new(Vec::new(), total, request));
    };

    let page_query = format!(
        "SELECT {columns} FROM {table} WHERE {filter} \
         ORDER BY id LIMIT ?2 OFFSET ?3"
    );
    let items = sqlx::query_as::<_, T>(&page_query)
        .bind(term.as_deref())
        .bind(request.page_size)
        .bind(offset)
        .fetch_all(pool)
        .await?;

    Ok(PageResult::new(items, total, request))
}
