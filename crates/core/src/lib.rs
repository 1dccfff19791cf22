//! Domain logic for the Smart Set scheduling platform.
//!
//! This crate has zero internal dependencies so it can be used by the
//! API/repository layer and any future worker or CLI tooling.

pub mod eighths;
pub mod elements;
pub mod error;
pub mod stripboard;
pub mod types;
