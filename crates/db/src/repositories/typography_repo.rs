//! Repository for the `typography` table.

use chrono::Utc;
use sqlx::SqlitePool;
use brandkit_core::pagination::{PageRequest, PageResult};
use brandkit_core::types::DbId;

use crate::models::typography::{CreateTypography, Typography};
use crate::search::{fold, SearchColumn};

/// Column list for `typography` queries.
const COLUMNS: &str = "\
    id, name, font_family, font_size, line_height, \
    bold, italic, underline, strikethrough, created_at";

/// Columns that take part in free-text search.
const SEARCH: &[SearchColumn] = &[
    SearchColumn::Integer("id"),
    SearchColumn::Folded("name_folded"),
    SearchColumn::Folded("font_family_folded"),
    SearchColumn::Real("font_size"),
    SearchColumn::Real("line_height"),
    SearchColumn::Flag("bold"),
    SearchColumn::Flag("italic"),
    SearchColumn::Flag("underline"),
    SearchColumn::Flag("strikethrough"),
];

/// Provides CRUD operations for typography presets.
pub struct TypographyRepo;

impl TypographyRepo {
    /// One page of typography presets matching the request's query.
    pub async fn list_page(
        pool: &SqlitePool,
        request: &PageRequest,
    ) -> Result<PageResult<Typography>, sqlx::Error> {
        super::fetch_page(pool, "typography", COLUMNS, SEARCH, request).await
    }

    /// Find a typography preset by its ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Typography>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM typography WHERE id = ?1");
        sqlx::query_as::<_, Typography>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new typography preset, stamping its creation time.
    pub async fn create(
        pool: &SqlitePool,
        dto: &CreateTypography,
    ) -> Result<Typography, sqlx::Error> {
        let query = format!(
            "INSERT INTO typography \
                 (name, font_family, font_size, line_height, \
                  bold, italic, underline, strikethrough, created_at, \
                  name_folded, font_family_folded) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Typography>(&query)
            .bind(&dto.name)
            .bind(&dto.font_family)
            .bind(dto.font_size)
            .bind(dto.line_height)
            .bind(dto.bold)
            .bind(dto.italic)
            .bind(dto.underline)
            .bind(dto.strikethrough)
            .bind(Utc::now())
            .bind(fold(&dto.name))
            .bind(fold(&dto.font_family))
            .fetch_one(pool)
            .await
    }

    /// Replace the editable fields of a preset. Returns `None` if no row matched.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        dto: &CreateTypography,
    ) -> Result<Option<Typography>, sqlx::Error> {
        let query = format!(
            "UPDATE typography SET \
                 name = ?2, font_family = ?3, font_size = ?4, line_height = ?5, \
                 bold = ?6, italic = ?7, underline = ?8, strikethrough = ?9, \
                 name_folded = ?10, font_family_folded = ?11 \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Typography>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.font_family)
            .bind(dto.font_size)
            .bind(dto.line_height)
            .bind(dto.bold)
            .bind(dto.italic)
            .bind(dto.underline)
            .bind(dto.strikethrough)
            .bind(fold(&dto.name))
            .bind(fold(&dto.font_family))
            .fetch_optional(pool)
            .await
    }

    /// Delete a typography preset by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM typography WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
