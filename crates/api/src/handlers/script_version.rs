//! Handlers for script version metadata records.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use smartset_core::error::CoreError;
use smartset_core::types::DbId;
use smartset_db::models::script_version::{CreateScriptVersion, ScriptVersion};
use smartset_db::repositories::ScriptVersionRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/script-versions
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateScriptVersion>,
) -> AppResult<(StatusCode, Json<ScriptVersion>)> {
    if input.filename.trim().is_empty() {
        return Err(CoreError::Validation("filename must not be empty".into()).into());
    }
    let version = ScriptVersionRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(version)))
}

/// GET /api/v1/projects/{project_id}/script-versions
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ScriptVersion>>> {
    let versions = ScriptVersionRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(versions))
}
