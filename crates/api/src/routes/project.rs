//! Route definitions for the `/projects` resource.
//!
//! Also nests scene, element, stripboard, event, and script-version routes
//! under `/projects/{project_id}/...`, plus the breakdown trigger.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{breakdown, calendar_event, element, project, scene, script_version, stripboard};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                    -> list
/// POST   /                                    -> create
/// GET    /{id}                                -> get_by_id
/// PUT    /{id}                                -> update
/// DELETE /{id}                                -> delete
/// POST   /{id}/breakdown                      -> start breakdown
///
/// GET    /{project_id}/scenes                 -> list_by_project
/// POST   /{project_id}/scenes                 -> create
/// PUT    /{project_id}/scenes                 -> replace_all
///
/// GET    /{project_id}/elements               -> list_by_project
/// POST   /{project_id}/elements               -> create
/// PUT    /{project_id}/elements               -> replace_all
///
/// GET    /{project_id}/stripboards            -> list_by_project
/// POST   /{project_id}/stripboards            -> create
///
/// GET    /{project_id}/events                 -> list_by_project
/// POST   /{project_id}/events                 -> create
///
/// GET    /{project_id}/script-versions        -> list_by_project
/// POST   /{project_id}/script-versions        -> create
/// ```
pub fn router() -> Router<AppState> {
    let scene_routes = Router::new().route(
        "/",
        get(scene::list_by_project)
            .post(scene::create)
            .put(scene::replace_all),
    );

    let element_routes = Router::new().route(
        "/",
        get(element::list_by_project)
            .post(element::create)
            .put(element::replace_all),
    );

    let stripboard_routes = Router::new().route(
        "/",
        get(stripboard::list_by_project).post(stripboard::create),
    );

    let event_routes = Router::new().route(
        "/",
        get(calendar_event::list_by_project).post(calendar_event::create),
    );

    let script_version_routes = Router::new().route(
        "/",
        get(script_version::list_by_project).post(script_version::create),
    );

    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/breakdown", post(breakdown::start))
        .nest("/{project_id}/scenes", scene_routes)
        .nest("/{project_id}/elements", element_routes)
        .nest("/{project_id}/stripboards", stripboard_routes)
        .nest("/{project_id}/events", event_routes)
        .nest("/{project_id}/script-versions", script_version_routes)
}
