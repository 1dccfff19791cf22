//! In-memory store for analysis jobs.
//!
//! Jobs are keyed by UUID and polled by the client at a fixed interval until
//! they reach a terminal status (`done` or `error`). Entries expire after a
//! TTL so abandoned polls cannot grow the map without bound; eviction runs
//! on a background interval and stops on cancellation.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// How often expired jobs are purged.
const EVICTION_INTERVAL: Duration = Duration::from_secs(60);

/// Analysis job lifecycle. There is no cancellation: once started, a job
/// runs to `done` or `error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Running,
    Done,
    Error,
}

/// Snapshot of one job, as returned to pollers.
#[derive(Debug, Clone, Serialize)]
pub struct JobSnapshot {
    pub id: Uuid,
    pub status: JobStatus,
    /// Scenes imported, set on completion.
    pub scene_count: Option<usize>,
    /// Elements imported, set on completion.
    pub element_count: Option<usize>,
    /// Failure detail, set on error.
    pub message: Option<String>,
}

#[derive(Debug)]
struct JobEntry {
    snapshot: JobSnapshot,
    /// Refreshed on every status transition; entries expire `ttl` after the
    /// last transition.
    touched_at: Instant,
}

/// Keyed job map with TTL eviction.
#[derive(Debug)]
pub struct JobStore {
    jobs: RwLock<HashMap<Uuid, JobEntry>>,
    ttl: Duration,
}

impl JobStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Create a new job in `running` status, returning its id.
    pub async fn start(&self) -> Uuid {
        let id = Uuid::new_v4();
        let entry = JobEntry {
            snapshot: JobSnapshot {
                id,
                status: JobStatus::Running,
                scene_count: None,
                element_count: None,
                message: None,
            },
            touched_at: Instant::now(),
        };
        self.jobs.write().await.insert(id, entry);
        id
    }

    /// Mark a job done with import counts.
    pub async fn complete(&self, id: Uuid, scene_count: usize, element_count: usize) {
        self.transition(id, |s| {
            s.status = JobStatus::Done;
            s.scene_count = Some(scene_count);
            s.element_count = Some(element_count);
        })
        .await;
    }

    /// Mark a job failed with a message.
    pub async fn fail(&self, id: Uuid, message: String) {
        self.transition(id, |s| {
            s.status = JobStatus::Error;
            s.message = Some(message);
        })
        .await;
    }

    /// Fetch a job snapshot, if it exists and has not expired.
    pub async fn get(&self, id: Uuid) -> Option<JobSnapshot> {
        self.jobs.read().await.get(&id).map(|e| e.snapshot.clone())
    }

    /// Remove entries whose last transition is older than the TTL.
    /// Returns the number evicted.
    pub async fn evict_expired(&self) -> usize {
        let mut jobs = self.jobs.write().await;
        let before = jobs.len();
        jobs.retain(|_, e| e.touched_at.elapsed() < self.ttl);
        before - jobs.len()
    }

    async fn transition(&self, id: Uuid, apply: impl FnOnce(&mut JobSnapshot)) {
        let mut jobs = self.jobs.write().await;
        if let Some(entry) = jobs.get_mut(&id) {
            apply(&mut entry.snapshot);
            entry.touched_at = Instant::now();
        } else {
            tracing::warn!(job_id = %id, "Status transition for unknown or evicted job");
        }
    }
}

/// Run the eviction loop until `cancel` is triggered.
pub async fn run_eviction(store: Arc<JobStore>, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = EVICTION_INTERVAL.as_secs(),
        "Job eviction task started"
    );
    let mut interval = tokio::time::interval(EVICTION_INTERVAL);
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Job eviction task stopping");
                break;
            }
            _ = interval.tick() => {
                let evicted = store.evict_expired().await;
                if evicted > 0 {
                    tracing::debug!(evicted, "Evicted expired analysis jobs");
                }
            }
        }
    }
}
