//! Shared response envelope types for API handlers.

use serde::Serialize;

/// `{ "data": T }` envelope for composite payloads (grouped board views,
/// move outcomes, job handles). Plain entity CRUD returns the entity
/// directly.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
