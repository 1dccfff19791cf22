//! Request handlers, one module per resource.

pub mod breakdown;
pub mod calendar_event;
pub mod element;
pub mod health;
pub mod project;
pub mod scene;
pub mod script_version;
pub mod stripboard;
