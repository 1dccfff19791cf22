//! Handlers for stripboard resources: the scheduling surface.
//!
//! The scheduling algebra itself (bucket grouping, moves, day remapping,
//! order normalization) lives in `smartset_core::stripboard` as pure
//! functions over a snapshot. Handlers here load the snapshot, call into
//! core, and persist the returned mutations inside a single transaction, so
//! a failed write leaves the board untouched.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use smartset_core::error::CoreError;
use smartset_core::stripboard::{
    self, Direction, MoveOutcome, ShootDayMap, StripRef,
};
use smartset_core::types::DbId;
use smartset_db::models::scene::Scene;
use smartset_db::models::stripboard::{
    CreateStripboard, SaveStripboard, Strip, Stripboard, STRIP_KIND_SCENE,
};
use smartset_db::repositories::{SceneRepo, StripRepo, StripboardRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// -- view types --------------------------------------------------------------

/// A stripboard rendered as its display buckets.
#[derive(Debug, Serialize)]
pub struct BoardView {
    pub board: Stripboard,
    /// Unscheduled bucket first, then day buckets in ascending date order.
    pub buckets: Vec<BucketView>,
}

/// One display bucket: `shoot_day` is `null` for the unscheduled pool.
#[derive(Debug, Serialize)]
pub struct BucketView {
    pub shoot_day: Option<NaiveDate>,
    pub strips: Vec<StripView>,
}

/// A strip joined with its scene.
#[derive(Debug, Serialize)]
pub struct StripView {
    pub strip: Strip,
    pub scene: Scene,
}

/// POST /api/v1/stripboards/{id}/move request body.
#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub strip_id: DbId,
    pub direction: Direction,
}

/// PUT /api/v1/stripboards/{id}/days request body.
#[derive(Debug, Deserialize)]
pub struct RemapDaysRequest {
    pub days: Vec<NaiveDate>,
}

// -- snapshot plumbing -------------------------------------------------------

/// Scheduler inputs derived from one board's rows.
fn snapshot(strips: &[Strip], scenes: &[Scene]) -> (Vec<StripRef>, ShootDayMap) {
    let refs = strips
        .iter()
        .filter(|s| s.strip_kind == STRIP_KIND_SCENE)
        .map(|s| StripRef {
            strip_id: s.id,
            scene_id: s.scene_id,
            sort_order: s.sort_order,
        })
        .collect();
    let days = scenes.iter().map(|s| (s.id, s.shoot_day)).collect();
    (refs, days)
}

async fn load_board(state: &AppState, id: DbId) -> AppResult<Stripboard> {
    StripboardRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Stripboard",
            id,
        }))
}

/// Load a board and project it into display buckets.
async fn load_view(state: &AppState, board: Stripboard) -> AppResult<BoardView> {
    let strips = StripRepo::list_by_board(&state.pool, board.id).await?;
    let scenes = SceneRepo::list_by_project(&state.pool, board.project_id).await?;

    let (refs, day_map) = snapshot(&strips, &scenes);
    let grouping = stripboard::group(&refs, &day_map, &board.shooting_days);

    let strips_by_id: HashMap<DbId, &Strip> = strips.iter().map(|s| (s.id, s)).collect();
    let scenes_by_id: HashMap<DbId, &Scene> = scenes.iter().map(|s| (s.id, s)).collect();

    let buckets = grouping
        .buckets
        .iter()
        .map(|group| BucketView {
            shoot_day: group.bucket.shoot_day(),
            strips: group
                .strips
                .iter()
                .filter_map(|r| {
                    // Grouping only emits strips whose scene resolved.
                    let strip = strips_by_id.get(&r.strip_id)?;
                    let scene = scenes_by_id.get(&r.scene_id)?;
                    Some(StripView {
                        strip: (*strip).clone(),
                        scene: (*scene).clone(),
                    })
                })
                .collect(),
        })
        .collect();

    Ok(BoardView { board, buckets })
}

// -- handlers ----------------------------------------------------------------

/// POST /api/v1/projects/{project_id}/stripboards
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateStripboard>,
) -> AppResult<(StatusCode, Json<Stripboard>)> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    let board = StripboardRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(board)))
}

/// GET /api/v1/projects/{project_id}/stripboards
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Stripboard>>> {
    let boards = StripboardRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(boards))
}

/// GET /api/v1/stripboards/{id}
///
/// The grouped view is recomputed per request from current rows; it is never
/// cached.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<BoardView>>> {
    let board = load_board(&state, id).await?;
    let view = load_view(&state, board).await?;
    Ok(Json(DataResponse { data: view }))
}

/// PUT /api/v1/stripboards/{id}
///
/// Full-board save: optionally renames the board and replaces its shooting
/// days and strip list, then normalizes sort orders to 0, 1, 2, ... per
/// bucket. One transaction end to end.
pub async fn save(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SaveStripboard>,
) -> AppResult<Json<DataResponse<BoardView>>> {
    let mut tx = state.pool.begin().await?;

    let board = StripboardRepo::update(
        &mut *tx,
        id,
        input.name.as_deref(),
        input.shooting_days.as_deref(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Stripboard",
        id,
    }))?;

    if let Some(new_strips) = &input.strips {
        StripRepo::delete_by_board(&mut *tx, id).await?;
        let mut inserted = Vec::with_capacity(new_strips.len());
        for s in new_strips {
            inserted.push(
                StripRepo::create(
                    &mut *tx,
                    id,
                    s.scene_id,
                    s.sort_order,
                    s.strip_kind.as_deref().unwrap_or(STRIP_KIND_SCENE),
                )
                .await?,
            );
        }

        // Bound sort-order drift accumulated by boundary moves.
        let scenes = SceneRepo::list_by_project(&mut *tx, board.project_id).await?;
        let (refs, day_map) = snapshot(&inserted, &scenes);
        for update in stripboard::normalize_orders(&refs, &day_map, &board.shooting_days) {
            StripRepo::set_order(&mut *tx, update.strip_id, update.sort_order).await?;
        }
    }

    tx.commit().await?;

    let view = load_view(&state, board).await?;
    Ok(Json(DataResponse { data: view }))
}

/// DELETE /api/v1/stripboards/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = StripboardRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Stripboard",
            id,
        }))
    }
}

/// POST /api/v1/stripboards/{id}/move
///
/// Move one strip a single position up or down. Within a bucket the two
/// affected strips swap sort orders; across a bucket boundary the strip's
/// scene is reassigned to the adjacent day (or unscheduled).
pub async fn move_strip(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MoveRequest>,
) -> AppResult<Json<DataResponse<MoveOutcome>>> {
    let board = load_board(&state, id).await?;

    let mut tx = state.pool.begin().await?;
    let strips = StripRepo::list_by_board(&mut *tx, id).await?;
    let scenes = SceneRepo::list_by_project(&mut *tx, board.project_id).await?;

    let (refs, day_map) = snapshot(&strips, &scenes);
    let outcome = stripboard::move_strip(
        &refs,
        &day_map,
        &board.shooting_days,
        input.strip_id,
        input.direction,
    )?;

    match &outcome {
        MoveOutcome::NoOp => {}
        MoveOutcome::Swapped { first, second } => {
            StripRepo::set_order(&mut *tx, first.strip_id, first.sort_order).await?;
            StripRepo::set_order(&mut *tx, second.strip_id, second.sort_order).await?;
        }
        MoveOutcome::Rebucketed {
            order,
            scene_id,
            shoot_day,
        } => {
            StripRepo::set_order(&mut *tx, order.strip_id, order.sort_order).await?;
            SceneRepo::set_shoot_day(&mut *tx, *scene_id, *shoot_day).await?;
        }
    }
    tx.commit().await?;

    Ok(Json(DataResponse { data: outcome }))
}

/// PUT /api/v1/stripboards/{id}/days
///
/// Replace the board's shooting-day range. Scheduled scenes are remapped
/// positionally (old day *i* onto new day *i*); scenes whose old day falls
/// past the new range become unscheduled.
pub async fn remap_days(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RemapDaysRequest>,
) -> AppResult<Json<Stripboard>> {
    let board = load_board(&state, id).await?;

    let mut tx = state.pool.begin().await?;
    let scenes = SceneRepo::list_by_project(&mut *tx, board.project_id).await?;
    let scene_days: Vec<(DbId, Option<NaiveDate>)> =
        scenes.iter().map(|s| (s.id, s.shoot_day)).collect();

    for change in stripboard::remap_days(&scene_days, &input.days) {
        SceneRepo::set_shoot_day(&mut *tx, change.scene_id, change.shoot_day).await?;
    }

    let board = StripboardRepo::update(&mut *tx, id, None, Some(&input.days))
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Stripboard",
            id,
        }))?;
    tx.commit().await?;

    Ok(Json(board))
}
