//! Calendar event entity model and DTOs.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use smartset_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `calendar_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CalendarEvent {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub event_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    /// `shoot` | `prep` | `travel` | `other`.
    pub kind: String,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new calendar event.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCalendarEvent {
    #[validate(length(min = 1, max = 300))]
    pub title: String,
    pub event_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub kind: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing calendar event. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCalendarEvent {
    pub title: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub kind: Option<String>,
    pub notes: Option<String>,
}
