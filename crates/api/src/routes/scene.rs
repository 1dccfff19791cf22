//! Route definitions for individually addressed scenes.

use axum::routing::get;
use axum::Router;

use crate::handlers::scene;
use crate::state::AppState;

/// Routes mounted at `/scenes`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(scene::get_by_id)
            .put(scene::update)
            .delete(scene::delete),
    )
}
