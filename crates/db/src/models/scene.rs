//! Scene entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smartset_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `scenes` table.
///
/// `pages` is always derived server-side from `page_eighths`; clients never
/// supply it directly.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Scene {
    pub id: DbId,
    pub project_id: DbId,
    /// Display label ("24A"), not necessarily numeric or unique.
    pub scene_number: String,
    pub slugline: String,
    pub int_ext: String,
    pub day_night: String,
    pub set_name: String,
    pub location: String,
    /// Eighths-of-a-page string, e.g. `"1 4/8"`.
    pub page_eighths: String,
    /// Derived float page count (`whole + eighths/8`).
    pub pages: f64,
    pub synopsis: String,
    pub element_ids: Vec<DbId>,
    /// `None` = unscheduled.
    pub shoot_day: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new scene. `pages` is derived from `page_eighths`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScene {
    pub scene_number: String,
    pub slugline: Option<String>,
    pub int_ext: Option<String>,
    pub day_night: Option<String>,
    pub set_name: Option<String>,
    pub location: Option<String>,
    /// Defaults to `"0"` if omitted.
    pub page_eighths: Option<String>,
    pub synopsis: Option<String>,
    pub element_ids: Option<Vec<DbId>>,
    pub shoot_day: Option<NaiveDate>,
}

/// DTO for updating an existing scene. All fields are optional.
///
/// `shoot_day` uses double-option semantics: omitted = leave unchanged,
/// `null` = clear (scene becomes unscheduled).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateScene {
    pub scene_number: Option<String>,
    pub slugline: Option<String>,
    pub int_ext: Option<String>,
    pub day_night: Option<String>,
    pub set_name: Option<String>,
    pub location: Option<String>,
    pub page_eighths: Option<String>,
    pub synopsis: Option<String>,
    pub element_ids: Option<Vec<DbId>>,
    #[serde(default, deserialize_with = "double_option")]
    pub shoot_day: Option<Option<NaiveDate>>,
}

/// Distinguish an absent field (outer `None`) from an explicit `null`
/// (`Some(None)`): any value present, including `null`, maps to `Some`.
fn double_option<'de, D>(de: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<NaiveDate>::deserialize(de).map(Some)
}
