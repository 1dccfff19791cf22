//! Route definitions for individually addressed production elements.

use axum::routing::put;
use axum::Router;

use crate::handlers::element;
use crate::state::AppState;

/// Routes mounted at `/elements`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", put(element::update).delete(element::delete))
}
