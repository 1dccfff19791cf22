//! Script breakdown via an external LLM service.
//!
//! [`client::BreakdownClient`] sends a screenplay PDF to the configured
//! chat-completions endpoint and parses the structured scene/element JSON it
//! returns, falling back through a configured model list. [`jobs::JobStore`]
//! tracks in-flight analyses so the API can expose a polling endpoint.

pub mod client;
pub mod jobs;
pub mod messages;

pub use client::{BreakdownClient, BreakdownError};
pub use jobs::{run_eviction, JobSnapshot, JobStatus, JobStore};
pub use messages::ExtractionResult;
