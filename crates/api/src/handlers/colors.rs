//! Handlers for the `/colors` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use brandkit_core::error::CoreError;
use brandkit_core::types::DbId;
use brandkit_db::models::color::{CreateColor, UpdateColor};
use brandkit_db::repositories::ColorRepo;

use super::ensure_matching_id;
use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::state::AppState;

/// GET /api/v1/colors
///
/// One page of colors, optionally filtered by `query`.
pub async fn list_colors(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let request = params.into_request()?;
    let page = ColorRepo::list_page(&state.pool, &request).await?;
    Ok(Json(page))
}

/// GET /api/v1/colors/{id}
pub async fn get_color(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let color = ColorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Color",
            id,
        }))?;

    Ok(Json(color))
}

/// POST /api/v1/colors
pub async fn create_color(
    State(state): State<AppState>,
    Json(input): Json<CreateColor>,
) -> AppResult<impl IntoResponse> {
    let input = input.normalized()?;
    let color = ColorRepo::create(&state.pool, &input).await?;

    tracing::info!(color_id = color.id, name = %color.name, hex = %color.hex, "Color created");

    Ok((StatusCode::CREATED, Json(color)))
}

/// PUT /api/v1/colors/{id}
///
/// Replace every editable field of a color.
pub async fn update_color(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateColor>,
) -> AppResult<impl IntoResponse> {
    ensure_matching_id(id, input.id)?;
    let fields = input.fields.normalized()?;

    let color = ColorRepo::update(&state.pool, id, &fields)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Color",
            id,
        }))?;

    tracing::info!(color_id = id, name = %color.name, "Color updated");

    Ok(Json(color))
}

/// DELETE /api/v1/colors/{id}
pub async fn delete_color(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ColorRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Color",
            id,
        }));
    }

    tracing::info!(color_id = id, "Color deleted");

    Ok(StatusCode::NO_CONTENT)
}
