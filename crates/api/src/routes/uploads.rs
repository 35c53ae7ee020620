use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Routes mounted at `/uploads`.
///
/// ```text
/// POST /   -> upload_file (multipart, body capped at `max_bytes`)
/// ```
pub fn router(max_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", post(uploads::upload_file))
        .layer(DefaultBodyLimit::max(max_bytes))
}
