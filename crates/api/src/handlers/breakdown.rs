//! Handlers for script breakdown: LLM extraction plus import.
//!
//! `POST /projects/{id}/breakdown` validates the upload, registers a job,
//! and spawns a background task that calls the extraction service and
//! imports the result (elements, scenes, initial stripboard) in one
//! transaction. Clients poll `GET /breakdown/jobs/{job_id}` until the job
//! reaches `done` or `error`. There is no cancellation.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use base64::Engine;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use smartset_breakdown::{ExtractionResult, JobSnapshot};
use smartset_core::eighths;
use smartset_core::elements::classify;
use smartset_core::error::CoreError;
use smartset_core::types::DbId;
use smartset_db::models::scene::CreateScene;
use smartset_db::models::stripboard::CreateStripboard;
use smartset_db::repositories::{ElementRepo, ProjectRepo, SceneRepo, StripRepo, StripboardRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/projects/{id}/breakdown request body.
#[derive(Debug, Deserialize)]
pub struct BreakdownRequest {
    #[serde(default = "default_filename")]
    pub filename: String,
    /// The screenplay PDF, base64-encoded.
    pub pdf_base64: String,
}

fn default_filename() -> String {
    "script.pdf".to_string()
}

/// Job handle returned on start.
#[derive(Debug, Serialize)]
pub struct JobStarted {
    pub job_id: Uuid,
}

/// POST /api/v1/projects/{id}/breakdown
pub async fn start(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<BreakdownRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<JobStarted>>)> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    if !state.breakdown.has_credential() {
        return Err(smartset_breakdown::BreakdownError::MissingCredential.into());
    }

    // Reject garbage before spending a model call on it.
    base64::engine::general_purpose::STANDARD
        .decode(&input.pdf_base64)
        .map_err(|_| AppError::BadRequest("pdf_base64 is not valid base64".to_string()))?;

    let job_id = state.jobs.start().await;
    tokio::spawn(run_breakdown(
        state.clone(),
        project_id,
        job_id,
        input.filename,
        input.pdf_base64,
    ));

    Ok((
        StatusCode::ACCEPTED,
        Json(DataResponse {
            data: JobStarted { job_id },
        }),
    ))
}

/// GET /api/v1/breakdown/jobs/{job_id}
pub async fn get_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> AppResult<Json<DataResponse<JobSnapshot>>> {
    let snapshot = state
        .jobs
        .get(job_id)
        .await
        .ok_or(AppError::BadRequest(format!("unknown or expired job {job_id}")))?;
    Ok(Json(DataResponse { data: snapshot }))
}

/// Background task: extract, then import.
async fn run_breakdown(
    state: AppState,
    project_id: DbId,
    job_id: Uuid,
    filename: String,
    pdf_base64: String,
) {
    tracing::info!(%job_id, project_id, %filename, "Breakdown started");
    let result = match state.breakdown.extract(&filename, &pdf_base64).await {
        Ok(result) => result,
        Err(err) => {
            tracing::warn!(%job_id, error = %err, "Breakdown extraction failed");
            state.jobs.fail(job_id, err.to_string()).await;
            return;
        }
    };

    match import_extraction(&state, project_id, &result).await {
        Ok((scene_count, element_count)) => {
            tracing::info!(%job_id, scene_count, element_count, "Breakdown imported");
            state.jobs.complete(job_id, scene_count, element_count).await;
        }
        Err(err) => {
            tracing::error!(%job_id, error = %err, "Breakdown import failed");
            state.jobs.fail(job_id, err.to_string()).await;
        }
    }
}

/// Persist an extraction: elements first (so scenes can reference them),
/// then scenes, then the initial stripboard with one strip per scene. All in
/// one transaction; a failure imports nothing.
async fn import_extraction(
    state: &AppState,
    project_id: DbId,
    result: &ExtractionResult,
) -> Result<(usize, usize), sqlx::Error> {
    let mut tx = state.pool.begin().await?;

    let mut element_ids_by_name: HashMap<&str, DbId> = HashMap::new();
    for el in &result.elements {
        let category = classify(&el.category);
        let row = ElementRepo::create(
            &mut *tx,
            project_id,
            &el.name,
            category.as_str(),
            el.cast_index,
        )
        .await?;
        element_ids_by_name.insert(el.name.as_str(), row.id);
    }

    let mut scene_ids = Vec::with_capacity(result.scenes.len());
    for sc in &result.scenes {
        // Model output is untrusted: an unparseable eighths string falls
        // back to zero pages rather than failing the whole import.
        let (eighths_str, pages) = match eighths::parse(&sc.page_eighths) {
            Ok(pages) => (sc.page_eighths.clone(), pages),
            Err(_) => ("0".to_string(), 0.0),
        };

        let element_ids: Vec<DbId> = result
            .scene_elements
            .get(&sc.scene_number)
            .map(|names| {
                names
                    .iter()
                    .filter_map(|n| element_ids_by_name.get(n.as_str()).copied())
                    .collect()
            })
            .unwrap_or_default();

        let input = CreateScene {
            scene_number: sc.scene_number.clone(),
            slugline: Some(sc.slugline.clone()),
            int_ext: Some(sc.int_ext.clone()),
            day_night: Some(sc.day_night.clone()),
            set_name: Some(sc.set_name.clone()),
            location: Some(sc.location.clone()),
            page_eighths: Some(eighths_str),
            synopsis: Some(sc.synopsis.clone()),
            element_ids: Some(element_ids),
            shoot_day: None,
        };
        let scene = SceneRepo::create(&mut *tx, project_id, &input, pages).await?;
        scene_ids.push(scene.id);
    }

    let board = StripboardRepo::create(
        &mut *tx,
        project_id,
        &CreateStripboard {
            name: "Stripboard".to_string(),
            shooting_days: None,
        },
    )
    .await?;
    StripRepo::create_for_scenes(&mut *tx, board.id, &scene_ids).await?;

    ProjectRepo::recompute_totals(&mut *tx, project_id).await?;
    tx.commit().await?;

    Ok((result.scenes.len(), result.elements.len()))
}
