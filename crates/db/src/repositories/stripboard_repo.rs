//! Repository for the `stripboards` table.

use chrono::NaiveDate;
use sqlx::{PgExecutor, PgPool};

use smartset_core::types::DbId;

use crate::models::stripboard::{CreateStripboard, Stripboard};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, shooting_days, created_at, updated_at";

/// Provides CRUD operations for stripboards.
pub struct StripboardRepo;

impl StripboardRepo {
    /// Insert a new stripboard, returning the created row.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        project_id: DbId,
        input: &CreateStripboard,
    ) -> Result<Stripboard, sqlx::Error> {
        let query = format!(
            "INSERT INTO stripboards (project_id, name, shooting_days)
             VALUES ($1, $2, COALESCE($3, '{{}}'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stripboard>(&query)
            .bind(project_id)
            .bind(&input.name)
            .bind(&input.shooting_days)
            .fetch_one(executor)
            .await
    }

    /// Find a stripboard by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Stripboard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stripboards WHERE id = $1");
        sqlx::query_as::<_, Stripboard>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all stripboards for a project, oldest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Stripboard>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM stripboards
             WHERE project_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Stripboard>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a board's name and/or explicit shooting-day list.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        name: Option<&str>,
        shooting_days: Option<&[NaiveDate]>,
    ) -> Result<Option<Stripboard>, sqlx::Error> {
        let query = format!(
            "UPDATE stripboards SET
                name = COALESCE($2, name),
                shooting_days = COALESCE($3, shooting_days),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stripboard>(&query)
            .bind(id)
            .bind(name)
            .bind(shooting_days)
            .fetch_optional(executor)
            .await
    }

    /// Delete a stripboard (cascades to its strips). Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stripboards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
