use axum::routing::get;
use axum::Router;

use crate::handlers::typography;
use crate::state::AppState;

/// Routes mounted at `/typography`.
///
/// ```text
/// GET    /        -> list_typography
/// POST   /        -> create_typography
/// GET    /{id}    -> get_typography
/// PUT    /{id}    -> update_typography
/// DELETE /{id}    -> delete_typography
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(typography::list_typography).post(typography::create_typography))
        .route(
            "/{id}",
            get(typography::get_typography)
                .put(typography::update_typography)
                .delete(typography::delete_typography),
        )
}
