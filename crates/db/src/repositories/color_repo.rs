//! Repository for the `colors` table.

use chrono::Utc;
use sqlx::SqlitePool;
use brandkit_core::pagination::{PageRequest, PageResult};
use brandkit_core::types::DbId;

use crate::models::color::{Color, CreateColor};
use crate::search::{fold, SearchColumn};

/// Column list for `colors` queries.
const COLUMNS: &str = "id, name, hex, created_at";

/// Columns that take part in free-text search.
const SEARCH: &[SearchColumn] = &[
    SearchColumn::Integer("id"),
    SearchColumn::Folded("name_folded"),
    SearchColumn::Text("hex"),
];

/// Provides CRUD operations for brand colors.
pub struct ColorRepo;

impl ColorRepo {
    /// One page of colors matching the request's query.
    pub async fn list_page(
        pool: &SqlitePool,
        request: &PageRequest,
    ) -> Result<PageResult<Color>, sqlx::Error> {
        super::fetch_page(pool, "colors", COLUMNS, SEARCH, request).await
    }

    /// Find a color by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Color>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM colors WHERE id = ?1");
        sqlx::query_as::<_, Color>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new color, stamping its creation time.
    pub async fn create(pool: &SqlitePool, dto: &CreateColor) -> Result<Color, sqlx::Error> {
        let query = format!(
            "INSERT INTO colors (name, hex, created_at, name_folded) \
             VALUES (?1, ?2, ?3, ?4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Color>(&query)
            .bind(&dto.name)
            .bind(&dto.hex)
            .bind(Utc::now())
            .bind(fold(&dto.name))
            .fetch_one(pool)
            .await
    }

    /// Replace the editable fields of a color. Returns `None` if no row matched.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        dto: &CreateColor,
    ) -> Result<Option<Color>, sqlx::Error> {
        let query = format!(
            "UPDATE colors SET name = ?2, hex = ?3, name_folded = ?4 \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Color>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.hex)
            .bind(fold(&dto.name))
            .fetch_optional(pool)
            .await
    }

    /// Delete a color by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM colors WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
