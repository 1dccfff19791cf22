pub mod breakdown;
pub mod calendar;
pub mod element;
pub mod health;
pub mod project;
pub mod scene;
pub mod stripboard;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete
/// /projects/{id}/breakdown                         start extraction (POST)
/// /projects/{project_id}/scenes                    list, create, replace all (PUT)
/// /projects/{project_id}/elements                  list, create, replace all (PUT)
/// /projects/{project_id}/stripboards               list, create
/// /projects/{project_id}/events                    list, create
/// /projects/{project_id}/script-versions           list, create
///
/// /scenes/{id}                                     get, update, delete
///
/// /elements/{id}                                   update, delete
///
/// /stripboards/{id}                                grouped view (GET), save (PUT), delete
/// /stripboards/{id}/move                           move strip (POST)
/// /stripboards/{id}/days                           remap shooting days (PUT)
///
/// /events/{id}                                     update, delete
///
/// /breakdown/jobs/{job_id}                         poll job status (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Project routes (also nest project-scoped sub-resources).
        .nest("/projects", project::router())
        // Individually addressed scenes.
        .nest("/scenes", scene::router())
        // Individually addressed elements.
        .nest("/elements", element::router())
        // Stripboard views, saves, moves, and day remapping.
        .nest("/stripboards", stripboard::router())
        // Individually addressed calendar events.
        .nest("/events", calendar::router())
        // Breakdown job polling.
        .nest("/breakdown", breakdown::router())
}
