//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Methods take `&PgPool` unless they participate in a multi-statement
//! transaction, in which case they take `impl PgExecutor` so callers can
//! pass either a pool or an open transaction.

pub mod calendar_event_repo;
pub mod element_repo;
pub mod project_repo;
pub mod scene_repo;
pub mod script_version_repo;
pub mod strip_repo;
pub mod stripboard_repo;

pub use calendar_event_repo::CalendarEventRepo;
pub use element_repo::ElementRepo;
pub use project_repo::ProjectRepo;
pub use scene_repo::SceneRepo;
pub use script_version_repo::ScriptVersionRepo;
pub use strip_repo::StripRepo;
pub use stripboard_repo::StripboardRepo;
