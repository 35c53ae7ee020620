//! Handlers for the `/assets` resource.
//!
//! Asset records only reference a file by URL. The file itself is stored
//! through `POST /api/v1/uploads` (see [`super::uploads`]).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use brandkit_core::error::CoreError;
use brandkit_core::types::DbId;
use brandkit_db::models::asset::{CreateAsset, UpdateAsset};
use brandkit_db::repositories::AssetRepo;

use super::ensure_matching_id;
use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::state::AppState;

/// GET /api/v1/assets
pub async fn list_assets(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let request = params.into_request()?;
    let page = AssetRepo::list_page(&state.pool, &request).await?;
    Ok(Json(page))
}

/// GET /api/v1/assets/{id}
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let asset = AssetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id,
        }))?;

    Ok(Json(asset))
}

/// POST /api/v1/assets
pub async fn create_asset(
    State(state): State<AppState>,
    Json(input): Json<CreateAsset>,
) -> AppResult<impl IntoResponse> {
    let input = input.normalized()?;
    let asset = AssetRepo::create(&state.pool, &input).await?;

    tracing::info!(asset_id = asset.id, name = %asset.name, url = %asset.url, "Asset created");

    Ok((StatusCode::CREATED, Json(asset)))
}

/// PUT /api/v1/assets/{id}
pub async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAsset>,
) -> AppResult<impl IntoResponse> {
    ensure_matching_id(id, input.id)?;
    let fields = input.fields.normalized()?;

    let asset = AssetRepo::update(&state.pool, id, &fields)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id,
        }))?;

    tracing::info!(asset_id = id, name = %asset.name, "Asset updated");

    Ok(Json(asset))
}

/// DELETE /api/v1/assets/{id}
///
/// Removes the record only; the uploaded file stays where it is.
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = AssetRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id,
        }));
    }

    tracing::info!(asset_id = id, "Asset deleted");

    Ok(StatusCode::NO_CONTENT)
}
