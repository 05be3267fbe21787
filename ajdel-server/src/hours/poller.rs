//! Status poller - once-per-second re-evaluation
//!
//! Publishes a fresh [`BusinessStatus`] on a `tokio::sync::watch` channel
//! every second. The channel is seeded with an immediate evaluation, so a
//! subscriber never observes stale or default data before the first tick.
//!
//! No drift correction: every tick recomputes from the wall clock, so
//! timer jitter self-corrects.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::{BusinessHours, BusinessStatus};

/// Fixed polling cadence
pub const POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Periodic re-evaluation of [`BusinessHours`]
///
/// Runs as a background task; stop it by cancelling the token handed to
/// [`run`](Self::run) - the interval timer is dropped with the task.
pub struct StatusPoller {
    hours: BusinessHours,
    tx: Arc<watch::Sender<BusinessStatus>>,
}

impl StatusPoller {
    /// Create a poller and the shared sender handle
    ///
    /// The channel starts with the status evaluated right now, so
    /// subscribers have real data before the poller is even spawned.
    pub fn new(hours: BusinessHours) -> (Self, Arc<watch::Sender<BusinessStatus>>) {
        let (tx, _) = watch::channel(hours.status_at(Utc::now()));
        let tx = Arc::new(tx);
        let poller = Self {
            hours,
            tx: tx.clone(),
        };
        (poller, tx)
    }

    /// Attach a poller to an existing channel (the server state owns the
    /// sender; the poller only feeds it)
    pub fn with_sender(hours: BusinessHours, tx: Arc<watch::Sender<BusinessStatus>>) -> Self {
        Self { hours, tx }
    }

    /// Tick every second until the token is cancelled
    pub async fn run(self, shutdown: CancellationToken) {
        let mut ticker = tokio::time::interval(POLL_INTERVAL);
        // Late ticks recompute from the clock anyway; no point bursting
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    tracing::debug!("Status poller stopped");
                    break;
                }
                _ = ticker.tick() => {
                    self.tx.send_replace(self.hours.status_at(Utc::now()));
                }
            }
        }
    }
}
