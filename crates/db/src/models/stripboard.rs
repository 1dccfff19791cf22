//! Stripboard and strip entity models and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smartset_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `stripboards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Stripboard {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    /// Explicitly planned shooting days; days also arise implicitly from
    /// scene assignments.
    pub shooting_days: Vec<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `strips` table: a scheduling position for one scene.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Strip {
    pub id: DbId,
    pub stripboard_id: DbId,
    pub scene_id: DbId,
    pub sort_order: f64,
    /// `scene` | `day_break` | `banner`. Only `scene` strips participate in
    /// scheduling.
    pub strip_kind: String,
    pub created_at: Timestamp,
}

/// Strip kind for plain scene strips.
pub const STRIP_KIND_SCENE: &str = "scene";

/// DTO for creating a new stripboard.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStripboard {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub shooting_days: Option<Vec<NaiveDate>>,
}

/// DTO for saving a stripboard's full strip list (upsert-by-id semantics).
#[derive(Debug, Clone, Deserialize)]
pub struct SaveStripboard {
    pub name: Option<String>,
    pub shooting_days: Option<Vec<NaiveDate>>,
    /// Full replacement strip list: `(scene_id, sort_order)` pairs.
    pub strips: Option<Vec<SaveStrip>>,
}

/// One strip in a full-board save.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveStrip {
    pub scene_id: DbId,
    pub sort_order: f64,
    pub strip_kind: Option<String>,
}
