use axum::routing::get;
use axum::Router;

use crate::handlers::colors;
use crate::state::AppState;

/// Routes mounted at `/colors`.
///
/// ```text
/// GET    /        -> list_colors
/// POST   /        -> create_color
/// GET    /{id}    -> get_color
/// PUT    /{id}    -> update_color
/// DELETE /{id}    -> delete_color
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(colors::list_colors).post(colors::create_color))
        .route(
            "/{id}",
            get(colors::get_color)
                .put(colors::update_color)
                .delete(colors::delete_color),
        )
}
