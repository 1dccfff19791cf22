//! Route definitions for stripboards: views, saves, moves, day remapping.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::stripboard;
use crate::state::AppState;

/// Routes mounted at `/stripboards`.
///
/// ```text
/// GET    /{id}        -> grouped view
/// PUT    /{id}        -> full-board save
/// DELETE /{id}        -> delete
/// POST   /{id}/move   -> move one strip up/down
/// PUT    /{id}/days   -> replace the shooting-day range
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(stripboard::get_by_id)
                .put(stripboard::save)
                .delete(stripboard::delete),
        )
        .route("/{id}/move", post(stripboard::move_strip))
        .route("/{id}/days", put(stripboard::remap_days))
}
