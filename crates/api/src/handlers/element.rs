//! Handlers for production element resources.
//!
//! Category labels are free text on the wire (client input or extraction
//! output) and are classified into the closed taxonomy exactly once, here,
//! before they reach the database.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use smartset_core::elements::{classify, ElementCategory};
use smartset_core::error::CoreError;
use smartset_core::types::DbId;
use smartset_db::models::element::{CreateElement, ProductionElement, UpdateElement};
use smartset_db::repositories::ElementRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Classify a raw category label, treating a missing label as unclassified.
fn category_of(raw: Option<&str>) -> ElementCategory {
    raw.map(classify).unwrap_or(ElementCategory::Other)
}

/// POST /api/v1/projects/{project_id}/elements
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateElement>,
) -> AppResult<(StatusCode, Json<ProductionElement>)> {
    if input.name.trim().is_empty() {
        return Err(CoreError::Validation("element name must not be empty".into()).into());
    }
    let category = category_of(input.category.as_deref());
    let element = ElementRepo::create(
        &state.pool,
        project_id,
        &input.name,
        category.as_str(),
        input.cast_index,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(element)))
}

/// GET /api/v1/projects/{project_id}/elements
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ProductionElement>>> {
    let elements = ElementRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(elements))
}

/// PUT /api/v1/projects/{project_id}/elements
///
/// Full replacement of the project's element list in one transaction.
pub async fn replace_all(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<Vec<CreateElement>>,
) -> AppResult<Json<Vec<ProductionElement>>> {
    let mut tx = state.pool.begin().await?;
    ElementRepo::delete_by_project(&mut *tx, project_id).await?;
    let mut elements = Vec::with_capacity(input.len());
    for item in &input {
        let category = category_of(item.category.as_deref());
        elements.push(
            ElementRepo::create(
                &mut *tx,
                project_id,
                &item.name,
                category.as_str(),
                item.cast_index,
            )
            .await?,
        );
    }
    tx.commit().await?;
    Ok(Json(elements))
}

/// PUT /api/v1/elements/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateElement>,
) -> AppResult<Json<ProductionElement>> {
    let category = input.category.as_deref().map(classify);
    let element = ElementRepo::update(
        &state.pool,
        id,
        &input,
        category.map(|c| c.as_str()),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Element",
        id,
    }))?;
    Ok(Json(element))
}

/// DELETE /api/v1/elements/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ElementRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Element",
            id,
        }))
    }
}
