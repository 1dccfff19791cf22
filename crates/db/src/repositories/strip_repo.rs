//! Repository for the `strips` table.

use sqlx::{PgExecutor, PgPool};

use smartset_core::types::DbId;

use crate::models::stripboard::{Strip, STRIP_KIND_SCENE};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, stripboard_id, scene_id, sort_order, strip_kind, created_at";

/// Provides CRUD operations for strips.
pub struct StripRepo;

impl StripRepo {
    /// Insert one strip.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        stripboard_id: DbId,
        scene_id: DbId,
        sort_order: f64,
        strip_kind: &str,
    ) -> Result<Strip, sqlx::Error> {
        let query = format!(
            "INSERT INTO strips (stripboard_id, scene_id, sort_order, strip_kind)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Strip>(&query)
            .bind(stripboard_id)
            .bind(scene_id)
            .bind(sort_order)
            .bind(strip_kind)
            .fetch_one(executor)
            .await
    }

    /// Bulk-create scene strips for a freshly imported board, with
    /// contiguous sort orders 0, 1, 2, ... in the given scene order.
    pub async fn create_for_scenes<'e>(
        executor: impl PgExecutor<'e>,
        stripboard_id: DbId,
        scene_ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        let orders: Vec<f64> = (0..scene_ids.len()).map(|i| i as f64).collect();
        let result = sqlx::query(
            "INSERT INTO strips (stripboard_id, scene_id, sort_order, strip_kind)
             SELECT $1, scene_id, ord, $4
             FROM UNNEST($2::BIGINT[], $3::DOUBLE PRECISION[]) AS t(scene_id, ord)",
        )
        .bind(stripboard_id)
        .bind(scene_ids)
        .bind(&orders)
        .bind(STRIP_KIND_SCENE)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    /// List a board's strips ordered by sort order.
    pub async fn list_by_board<'e>(
        executor: impl PgExecutor<'e>,
        stripboard_id: DbId,
    ) -> Result<Vec<Strip>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM strips
             WHERE stripboard_id = $1
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, Strip>(&query)
            .bind(stripboard_id)
            .fetch_all(executor)
            .await
    }

    /// Set one strip's sort order. Returns `true` if a row was updated.
    pub async fn set_order<'e>(
        executor: impl PgExecutor<'e>,
        strip_id: DbId,
        sort_order: f64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE strips SET sort_order = $2 WHERE id = $1")
            .bind(strip_id)
            .bind(sort_order)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete all strips on a board. First half of a full-board save.
    pub async fn delete_by_board<'e>(
        executor: impl PgExecutor<'e>,
        stripboard_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM strips WHERE stripboard_id = $1")
            .bind(stripboard_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete one strip. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM strips WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
