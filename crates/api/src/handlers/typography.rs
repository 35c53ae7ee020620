//! Handlers for the `/typography` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use brandkit_core::error::CoreError;
use brandkit_core::types::DbId;
use brandkit_db::models::typography::{CreateTypography, UpdateTypography};
use brandkit_db::repositories::TypographyRepo;

use super::ensure_matching_id;
use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::state::AppState;

/// GET /api/v1/typography
pub async fn list_typography(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let request = params.into_request()?;
    let page = TypographyRepo::list_page(&state.pool, &request).await?;
    Ok(Json(page))
}

/// GET /api/v1/typography/{id}
pub async fn get_typography(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let preset = TypographyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Typography",
            id,
        }))?;

    Ok(Json(preset))
}

/// POST /api/v1/typography
pub async fn create_typography(
    State(state): State<AppState>,
    Json(input): Json<CreateTypography>,
) -> AppResult<impl IntoResponse> {
    let input = input.normalized()?;
    let preset = TypographyRepo::create(&state.pool, &input).await?;

    tracing::info!(
        typography_id = preset.id,
        name = %preset.name,
        font_family = %preset.font_family,
        "Typography preset created",
    );

    Ok((StatusCode::CREATED, Json(preset)))
}

/// PUT /api/v1/typography/{id}
pub async fn update_typography(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTypography>,
) -> AppResult<impl IntoResponse> {
    ensure_matching_id(id, input.id)?;
    let fields = input.fields.normalized()?;

    let preset = TypographyRepo::update(&state.pool, id, &fields)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Typography",
            id,
        }))?;

    tracing::info!(typography_id = id, name = %preset.name, "Typography preset updated");

    Ok(Json(preset))
}

/// DELETE /api/v1/typography/{id}
pub async fn delete_typography(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TypographyRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Typography",
            id,
        }));
    }

    tracing::info!(typography_id = id, "Typography preset deleted");

    Ok(StatusCode::NO_CONTENT)
}
