use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tokio::sync::watch;

use crate::auth::SessionStore;
use crate::core::tasks::{BackgroundTasks, TaskKind};
use crate::core::{Config, Result};
use crate::hours::{BusinessStatus, StatusPoller};

/// How often expired admin sessions are swept out
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(600);

/// Server state - shared handles to every service
///
/// Cloning is shallow (Arc everywhere), so handlers receive it by value.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | Immutable configuration |
/// | db | Surreal<Db> | Embedded database |
/// | sessions | Arc<SessionStore> | Admin session tokens |
/// | status | Arc<watch::Sender<BusinessStatus>> | Latest open/closed snapshot |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// Admin session store
    pub sessions: Arc<SessionStore>,
    /// Business status channel; the poller feeds it, handlers read it
    pub status: Arc<watch::Sender<BusinessStatus>>,
    started_at: Instant,
}

impl ServerState {
    /// Open the database under the configured work dir and build the state
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = crate::db::init_database(&config.work_dir).await?;
        Ok(Self::with_db(config.clone(), db))
    }

    /// Build state around an existing database handle (used by tests with
    /// the in-memory engine)
    pub fn with_db(config: Config, db: Surreal<Db>) -> Self {
        // Seed the channel immediately so no reader ever sees default data
        let (tx, _) = watch::channel(config.hours.status_at(Utc::now()));
        Self {
            config,
            db,
            sessions: Arc::new(SessionStore::default()),
            status: Arc::new(tx),
            started_at: Instant::now(),
        }
    }

    /// Latest business status snapshot
    pub fn current_status(&self) -> BusinessStatus {
        self.status.borrow().clone()
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Register and start all background tasks
    pub fn start_background_tasks(&self) -> BackgroundTasks {
        let mut tasks = BackgroundTasks::new();

        // Status poller - the once-per-second open/closed re-evaluation
        let poller = StatusPoller::with_sender(self.config.hours.clone(), self.status.clone());
        tasks.spawn(
            "status_poller",
            TaskKind::Periodic,
            poller.run(tasks.shutdown_token()),
        );

        // Session sweeper - drops expired admin tokens
        let sessions = self.sessions.clone();
        let token = tasks.shutdown_token();
        tasks.spawn("session_sweeper", TaskKind::Worker, async move {
            let mut ticker = tokio::time::interval(SESSION_SWEEP_INTERVAL);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        let removed = sessions.sweep();
                        if removed > 0 {
                            tracing::debug!(removed, "Swept expired admin sessions");
                        }
                    }
                }
            }
        });

        tasks.log_summary();
        tasks
    }
}
