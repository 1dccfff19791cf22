use std::sync::Arc;

use smartset_breakdown::{BreakdownClient, JobStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: smartset_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Breakdown service client (LLM extraction).
    pub breakdown: Arc<BreakdownClient>,
    /// In-memory analysis job store with TTL eviction.
    pub jobs: Arc<JobStore>,
}
