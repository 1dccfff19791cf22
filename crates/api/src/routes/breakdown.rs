//! Route definitions for breakdown job polling.

use axum::routing::get;
use axum::Router;

use crate::handlers::breakdown;
use crate::state::AppState;

/// Routes mounted at `/breakdown`.
pub fn router() -> Router<AppState> {
    Router::new().route("/jobs/{job_id}", get(breakdown::get_job))
}
