//! Repository for the `production_elements` table.

use sqlx::{PgExecutor, PgPool};

use smartset_core::types::DbId;

use crate::models::element::{ProductionElement, UpdateElement};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, category, cast_index, created_at, updated_at";

/// Provides CRUD operations for production elements.
///
/// `category` is always the stable string form of a classified
/// `ElementCategory`; callers run `classify` before reaching this layer.
pub struct ElementRepo;

impl ElementRepo {
    /// Insert a new element, returning the created row.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        project_id: DbId,
        name: &str,
        category: &str,
        cast_index: Option<i32>,
    ) -> Result<ProductionElement, sqlx::Error> {
        let query = format!(
            "INSERT INTO production_elements (project_id, name, category, cast_index)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductionElement>(&query)
            .bind(project_id)
            .bind(name)
            .bind(category)
            .bind(cast_index)
            .fetch_one(executor)
            .await
    }

    /// List all elements for a project, cast first (by cast index), then by
    /// category and name.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProductionElement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM production_elements
             WHERE project_id = $1
             ORDER BY cast_index ASC NULLS LAST, category ASC, name ASC"
        );
        sqlx::query_as::<_, ProductionElement>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update an element. Only non-`None` fields are applied; `category`
    /// must already be classified.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateElement,
        category: Option<&str>,
    ) -> Result<Option<ProductionElement>, sqlx::Error> {
        let query = format!(
            "UPDATE production_elements SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                cast_index = COALESCE($4, cast_index),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductionElement>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(category)
            .bind(input.cast_index)
            .fetch_optional(pool)
            .await
    }

    /// Delete all elements for a project. First half of a bulk replace.
    pub async fn delete_by_project<'e>(
        executor: impl PgExecutor<'e>,
        project_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM production_elements WHERE project_id = $1")
            .bind(project_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete an element by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM production_elements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
