//! Script version metadata records.

use serde::{Deserialize, Serialize};
use smartset_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `script_versions` table. Pure metadata; the PDF itself is
/// not stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScriptVersion {
    pub id: DbId,
    pub project_id: DbId,
    pub label: String,
    pub filename: String,
    pub page_count: Option<i32>,
    pub uploaded_at: Timestamp,
}

/// DTO for recording a new script version.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScriptVersion {
    pub label: String,
    pub filename: String,
    pub page_count: Option<i32>,
}
