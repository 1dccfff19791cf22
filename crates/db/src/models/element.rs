//! Production element entity model and DTOs.

use serde::{Deserialize, Serialize};
use smartset_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `production_elements` table.
///
/// `category` holds the stable string form of
/// [`smartset_core::elements::ElementCategory`], assigned once at ingestion
/// by `classify` -- free-text labels never reach the database.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductionElement {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub category: String,
    /// Board position for cast members (1 = lead), unset for non-cast.
    pub cast_index: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new element. `category` is the raw label to classify.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateElement {
    pub name: String,
    pub category: Option<String>,
    pub cast_index: Option<i32>,
}

/// DTO for updating an existing element. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateElement {
    pub name: Option<String>,
    pub category: Option<String>,
    pub cast_index: Option<i32>,
}
