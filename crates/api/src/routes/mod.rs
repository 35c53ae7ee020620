pub mod assets;
pub mod colors;
pub mod health;
pub mod typography;
pub mod uploads;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /colors                 list, create
/// /colors/{id}            get, update, delete
///
/// /typography             list, create
/// /typography/{id}        get, update, delete
///
/// /assets                 list, create
/// /assets/{id}            get, update, delete
///
/// /uploads                store an asset file (multipart)
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .nest("/colors", colors::router())
        .nest("/typography", typography::router())
        .nest("/assets", assets::router())
        .nest("/uploads", uploads::router(config.max_upload_bytes))
}
