//! Handlers for calendar event resources.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use smartset_core::error::CoreError;
use smartset_core::types::DbId;
use smartset_db::models::calendar_event::{
    CalendarEvent, CreateCalendarEvent, UpdateCalendarEvent,
};
use smartset_db::repositories::CalendarEventRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/events
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateCalendarEvent>,
) -> AppResult<(StatusCode, Json<CalendarEvent>)> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    let event = CalendarEventRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /api/v1/projects/{project_id}/events
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<CalendarEvent>>> {
    let events = CalendarEventRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(events))
}

/// PUT /api/v1/events/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCalendarEvent>,
) -> AppResult<Json<CalendarEvent>> {
    let event = CalendarEventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CalendarEvent",
            id,
        }))?;
    Ok(Json(event))
}

/// DELETE /api/v1/events/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = CalendarEventRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "CalendarEvent",
            id,
        }))
    }
}
