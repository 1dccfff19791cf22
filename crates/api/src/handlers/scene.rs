//! Handlers for scene resources.
//!
//! Scenes are listed and created under projects
//! (`/projects/{project_id}/scenes`) and addressed individually at
//! `/scenes/{id}`. The page count (`pages`) is always derived here from the
//! `page_eighths` string; clients never supply it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use smartset_core::eighths;
use smartset_core::error::CoreError;
use smartset_core::types::DbId;
use smartset_db::models::scene::{CreateScene, Scene, UpdateScene};
use smartset_db::repositories::{ProjectRepo, SceneRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Parse the eighths string of a create DTO, defaulting to `"0"`.
fn derive_pages(input: &CreateScene) -> Result<f64, CoreError> {
    eighths::parse(input.page_eighths.as_deref().unwrap_or("0"))
}

/// POST /api/v1/projects/{project_id}/scenes
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateScene>,
) -> AppResult<(StatusCode, Json<Scene>)> {
    let pages = derive_pages(&input)?;

    let mut tx = state.pool.begin().await?;
    let scene = SceneRepo::create(&mut *tx, project_id, &input, pages).await?;
    ProjectRepo::recompute_totals(&mut *tx, project_id).await?;
    tx.commit().await?;

    Ok((StatusCode::CREATED, Json(scene)))
}

/// GET /api/v1/projects/{project_id}/scenes
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Scene>>> {
    let scenes = SceneRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(scenes))
}

/// PUT /api/v1/projects/{project_id}/scenes
///
/// Full replacement of the project's scene list. Deletes existing scenes,
/// inserts the new list, and recomputes the project's cached
/// `scene_count`/`total_pages`, all in one transaction.
pub async fn replace_all(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<Vec<CreateScene>>,
) -> AppResult<Json<Vec<Scene>>> {
    // Parse every eighths string up front so a malformed entry rejects the
    // whole request before any write.
    let pages: Vec<f64> = input
        .iter()
        .map(derive_pages)
        .collect::<Result<_, _>>()?;

    let mut tx = state.pool.begin().await?;
    SceneRepo::delete_by_project(&mut *tx, project_id).await?;
    let mut scenes = Vec::with_capacity(input.len());
    for (scene_input, pages) in input.iter().zip(pages) {
        scenes.push(SceneRepo::create(&mut *tx, project_id, scene_input, pages).await?);
    }
    ProjectRepo::recompute_totals(&mut *tx, project_id).await?;
    tx.commit().await?;

    Ok(Json(scenes))
}

/// GET /api/v1/scenes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Scene>> {
    let scene = SceneRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Scene", id }))?;
    Ok(Json(scene))
}

/// PUT /api/v1/scenes/{id}
///
/// Partial update: absent fields are left unchanged; `shoot_day: null`
/// clears the assignment. A changed `page_eighths` re-derives `pages`.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateScene>,
) -> AppResult<Json<Scene>> {
    let pages = input
        .page_eighths
        .as_deref()
        .map(eighths::parse)
        .transpose()?;

    let scene = SceneRepo::update(&state.pool, id, &input, pages)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Scene", id }))?;

    if pages.is_some() {
        ProjectRepo::recompute_totals(&state.pool, scene.project_id).await?;
    }
    Ok(Json(scene))
}

/// DELETE /api/v1/scenes/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let scene = SceneRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Scene", id }))?;

    let mut tx = state.pool.begin().await?;
    SceneRepo::delete(&mut *tx, id).await?;
    ProjectRepo::recompute_totals(&mut *tx, scene.project_id).await?;
    tx.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}
