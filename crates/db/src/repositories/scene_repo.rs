//! Repository for the `scenes` table.

use chrono::NaiveDate;
use sqlx::{PgExecutor, PgPool};

use smartset_core::types::DbId;

use crate::models::scene::{CreateScene, Scene, UpdateScene};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, scene_number, slugline, int_ext, day_night, \
    set_name, location, page_eighths, pages, synopsis, element_ids, shoot_day, \
    created_at, updated_at";

/// Provides CRUD operations for scenes.
///
/// `pages` is never taken from a DTO: callers derive it from the eighths
/// string (`smartset_core::eighths::parse`) and pass it explicitly, keeping
/// the two representations in lockstep.
pub struct SceneRepo;

impl SceneRepo {
    /// Insert a new scene, returning the created row.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        project_id: DbId,
        input: &CreateScene,
        pages: f64,
    ) -> Result<Scene, sqlx::Error> {
        let query = format!(
            "INSERT INTO scenes
                (project_id, scene_number, slugline, int_ext, day_night, set_name,
                 location, page_eighths, pages, synopsis, element_ids, shoot_day)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, 'INT'), COALESCE($5, 'DAY'),
                     COALESCE($6, ''), COALESCE($7, ''), COALESCE($8, '0'), $9,
                     COALESCE($10, ''), COALESCE($11, '{{}}'), $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scene>(&query)
            .bind(project_id)
            .bind(&input.scene_number)
            .bind(&input.slugline)
            .bind(&input.int_ext)
            .bind(&input.day_night)
            .bind(&input.set_name)
            .bind(&input.location)
            .bind(&input.page_eighths)
            .bind(pages)
            .bind(&input.synopsis)
            .bind(&input.element_ids)
            .bind(input.shoot_day)
            .fetch_one(executor)
            .await
    }

    /// Find a scene by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Scene>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scenes WHERE id = $1");
        sqlx::query_as::<_, Scene>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all scenes for a project, ordered by creation time ascending.
    pub async fn list_by_project<'e>(
        executor: impl PgExecutor<'e>,
        project_id: DbId,
    ) -> Result<Vec<Scene>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM scenes
             WHERE project_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Scene>(&query)
            .bind(project_id)
            .fetch_all(executor)
            .await
    }

    /// Update a scene. Only non-`None` fields in `input` are applied.
    ///
    /// `pages` must be `Some` exactly when `input.page_eighths` is `Some`.
    /// The `shoot_day` double option distinguishes "leave unchanged" from
    /// "clear" (see [`UpdateScene`]).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateScene,
        pages: Option<f64>,
    ) -> Result<Option<Scene>, sqlx::Error> {
        let query = format!(
            "UPDATE scenes SET
                scene_number = COALESCE($2, scene_number),
                slugline = COALESCE($3, slugline),
                int_ext = COALESCE($4, int_ext),
                day_night = COALESCE($5, day_night),
                set_name = COALESCE($6, set_name),
                location = COALESCE($7, location),
                page_eighths = COALESCE($8, page_eighths),
                pages = COALESCE($9, pages),
                synopsis = COALESCE($10, synopsis),
                element_ids = COALESCE($11, element_ids),
                shoot_day = CASE WHEN $12 THEN $13 ELSE shoot_day END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scene>(&query)
            .bind(id)
            .bind(&input.scene_number)
            .bind(&input.slugline)
            .bind(&input.int_ext)
            .bind(&input.day_night)
            .bind(&input.set_name)
            .bind(&input.location)
            .bind(&input.page_eighths)
            .bind(pages)
            .bind(&input.synopsis)
            .bind(&input.element_ids)
            .bind(input.shoot_day.is_some())
            .bind(input.shoot_day.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Reassign (or clear) a scene's shoot day. Used by the scheduler's
    /// cross-bucket moves and day remapping, inside a transaction.
    pub async fn set_shoot_day<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        shoot_day: Option<NaiveDate>,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE scenes SET shoot_day = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(shoot_day)
                .execute(executor)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete all scenes for a project. First half of a bulk replace.
    pub async fn delete_by_project<'e>(
        executor: impl PgExecutor<'e>,
        project_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM scenes WHERE project_id = $1")
            .bind(project_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete a scene by ID. Returns `true` if a row was removed.
    pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM scenes WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
