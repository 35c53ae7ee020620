//! Repository for the `assets` table.

use chrono::Utc;
use sqlx::SqlitePool;
use brandkit_core::pagination::{PageRequest, PageResult};
use brandkit_core::types::DbId;

use crate::models::asset::{Asset, CreateAsset};
use crate::search::{fold, SearchColumn};

/// Column list for `assets` queries.
const COLUMNS: &str = "id, name, url, created_at";

/// Columns that take part in free-text search.
const SEARCH: &[SearchColumn] = &[
    SearchColumn::Integer("id"),
    SearchColumn::Folded("name_folded"),
    SearchColumn::Folded("url_folded"),
];

/// Provides CRUD operations for uploaded assets.
pub struct AssetRepo;

impl AssetRepo {
    pub async fn list_page(
        pool: &SqlitePool,
        request: &PageRequest,
    ) -> Result<PageResult<Asset>, sqlx::Error> {
        super::fetch_page(pool, "assets", COLUMNS, SEARCH, request).await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = ?1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an asset record for an already-stored file.
    pub async fn create(pool: &SqlitePool, dto: &CreateAsset) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets (name, url, created_at, name_folded, url_folded) \
             VALUES (?1, ?2, ?3, ?4, ?5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(&dto.name)
            .bind(&dto.url)
            .bind(Utc::now())
            .bind(fold(&dto.name))
            .bind(fold(&dto.url))
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        dto: &CreateAsset,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET name = ?2, url = ?3, name_folded = ?4, url_folded = ?5 \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.url)
            .bind(fold(&dto.name))
            .bind(fold(&dto.url))
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was deleted. The stored file is left in place.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
