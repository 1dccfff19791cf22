//! Repository for the `calendar_events` table.

use sqlx::PgPool;

use smartset_core::types::DbId;

use crate::models::calendar_event::{CalendarEvent, CreateCalendarEvent, UpdateCalendarEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, event_date, start_time, end_time, \
    kind, notes, created_at, updated_at";

/// Provides CRUD operations for calendar events.
pub struct CalendarEventRepo;

impl CalendarEventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateCalendarEvent,
    ) -> Result<CalendarEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO calendar_events
                (project_id, title, event_date, start_time, end_time, kind, notes)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'other'), COALESCE($7, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CalendarEvent>(&query)
            .bind(project_id)
            .bind(&input.title)
            .bind(input.event_date)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.kind)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// List all events for a project in chronological order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<CalendarEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM calendar_events
             WHERE project_id = $1
             ORDER BY event_date ASC, start_time ASC NULLS FIRST, id ASC"
        );
        sqlx::query_as::<_, CalendarEvent>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update an event. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCalendarEvent,
    ) -> Result<Option<CalendarEvent>, sqlx::Error> {
        let query = format!(
            "UPDATE calendar_events SET
                title = COALESCE($2, title),
                event_date = COALESCE($3, event_date),
                start_time = COALESCE($4, start_time),
                end_time = COALESCE($5, end_time),
                kind = COALESCE($6, kind),
                notes = COALESCE($7, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CalendarEvent>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.event_date)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.kind)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM calendar_events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
