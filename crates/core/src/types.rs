/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Shoot days are calendar dates with no time component, serialized as
/// `YYYY-MM-DD` (which makes lexicographic and chronological order agree).
pub type ShootDay = chrono::NaiveDate;
