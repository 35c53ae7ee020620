//! Asset file upload.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use brandkit_core::validation::{self, AssetKind};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response body of a successful upload.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Public URL the stored file is served from.
    pub url: String,
}

/// POST /api/v1/uploads
///
/// Accepts a multipart form with a required `file` field holding a PNG,
/// JPEG or SVG image. The file is stored under a generated name in the
/// upload directory and its public URL is returned.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadResponse>)> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let content_type = field.content_type().unwrap_or("").to_lowercase();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        upload = Some((content_type, data.to_vec()));
    }

    let (content_type, data) =
        upload.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    let ext = match (
        AssetKind::from_content_type(&content_type),
        validation::extension_for_content_type(&content_type),
    ) {
        (Some(_), Some(ext)) => ext,
        _ => {
            return Err(AppError::BadRequest(format!(
                "Unsupported file type '{content_type}'. {}",
                validation::UNSUPPORTED_FILE_MESSAGE
            )))
        }
    };

    if data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }

    let upload_dir = &state.config.upload_dir;
    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;

    let stored_name = format!("{}.{ext}", uuid::Uuid::new_v4());
    tokio::fs::write(upload_dir.join(&stored_name), &data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let url = format!("{}/uploads/{stored_name}", state.config.public_base_url);

    tracing::info!(
        file = %stored_name,
        content_type = %content_type,
        size_bytes = data.len(),
        "Asset file uploaded",
    );

    Ok((StatusCode::CREATED, Json(UploadResponse { url })))
}
