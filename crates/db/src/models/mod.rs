pub mod calendar_event;
pub mod element;
pub mod project;
pub mod scene;
pub mod script_version;
pub mod stripboard;
