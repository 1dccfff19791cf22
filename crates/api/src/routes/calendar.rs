//! Route definitions for individually addressed calendar events.

use axum::routing::put;
use axum::Router;

use crate::handlers::calendar_event;
use crate::state::AppState;

/// Routes mounted at `/events`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(calendar_event::update).delete(calendar_event::delete),
    )
}
