pub mod assets;
pub mod colors;
pub mod typography;
pub mod uploads;

use brandkit_core::types::DbId;

use crate::error::AppError;

/// Reject an update body whose `id` disagrees with the path id.
pub(crate) fn ensure_matching_id(path_id: DbId, body_id: Option<DbId>) -> Result<(), AppError> {
    match body_id {
        Some(body_id) if body_id != path_id => Err(AppError::BadRequest(format!(
            "Body id {body_id} does not match path id {path_id}"
        ))),
        _ => Ok(()),
    }
}
