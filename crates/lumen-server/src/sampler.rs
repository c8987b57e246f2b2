//! Background sampler for `app_active_users`.
//!
//! Spawned once at startup. The first sample is written immediately, then one
//! per interval until the handle is stopped (or the runtime shuts down).

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use lumen_core::metrics::Gauge;

use crate::random::RandomSource;

pub struct ActiveUsersSampler {
    gauge: Arc<Gauge>,
    random: Arc<dyn RandomSource>,
    max_users: u32,
}

impl ActiveUsersSampler {
    pub fn new(gauge: Arc<Gauge>, random: Arc<dyn RandomSource>, max_users: u32) -> Self {
        Self { gauge, random, max_users }
    }

    /// Draw one value in `[0, max_users)` and write it to the gauge.
    pub fn sample_once(&self) -> u32 {
        let users = self.random.below(self.max_users);
        self.gauge.set(f64::from(users));
        users
    }

    /// Run on the current tokio runtime.
    ///
    /// Dropping the returned handle detaches the task; only
    /// [`SamplerHandle::stop`] ends it.
    pub fn spawn(self, interval: Duration) -> SamplerHandle {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let join = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut stoppable = true;
            loop {
                tokio::select! {
                    biased;
                    stop = &mut stop_rx, if stoppable => match stop {
                        Ok(()) => break,
                        // Handle dropped without `stop`: keep sampling.
                        Err(_) => stoppable = false,
                    },
                    _ = ticker.tick() => {
                        let users = self.sample_once();
                        tracing::debug!(active_users = users, "sampled active users");
                    }
                }
            }
            tracing::debug!("active users sampler stopped");
        });
        SamplerHandle { stop_tx, join }
    }
}

/// Lifecycle hook for a spawned sampler.
pub struct SamplerHandle {
    stop_tx: oneshot::Sender<()>,
    join: JoinHandle<()>,
}

impl SamplerHandle {
    /// Signal the task and wait for it to exit.
    pub async fn stop(self) {
        let _ = self.stop_tx.send(());
        if let Err(e) = self.join.await {
            tracing::warn!(error = %e, "sampler task ended abnormally");
        }
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}
