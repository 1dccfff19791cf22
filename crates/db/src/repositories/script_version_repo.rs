//! Repository for the `script_versions` table.

use sqlx::PgPool;

use smartset_core::types::DbId;

use crate::models::script_version::{CreateScriptVersion, ScriptVersion};

const COLUMNS: &str = "id, project_id, label, filename, page_count, uploaded_at";

/// Provides operations for script version metadata records.
pub struct ScriptVersionRepo;

impl ScriptVersionRepo {
    /// Record a new script version, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateScriptVersion,
    ) -> Result<ScriptVersion, sqlx::Error> {
        let query = format!(
            "INSERT INTO script_versions (project_id, label, filename, page_count)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ScriptVersion>(&query)
            .bind(project_id)
            .bind(&input.label)
            .bind(&input.filename)
            .bind(input.page_count)
            .fetch_one(pool)
            .await
    }

    /// List a project's script versions, newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ScriptVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM script_versions
             WHERE project_id = $1
             ORDER BY uploaded_at DESC, id DESC"
        );
        sqlx::query_as::<_, ScriptVersion>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
