//! Shared application state handed to every handler through axum `State`.

use std::sync::Arc;

use lumen_core::error::Result;

use crate::config::ServerConfig;
use crate::obs::AppMetrics;
use crate::random::{RandomSource, ThreadRandom};
use crate::sampler::ActiveUsersSampler;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    metrics: AppMetrics,
    random: Arc<dyn RandomSource>,
}

impl AppState {
    /// Build state with the thread-local RNG.
    /// Metric registration failures come back as errors instead of panics.
    pub fn new(cfg: ServerConfig) -> Result<Self> {
        Self::with_random(cfg, Arc::new(ThreadRandom))
    }

    pub fn with_random(cfg: ServerConfig, random: Arc<dyn RandomSource>) -> Result<Self> {
        let metrics = AppMetrics::new()?;
        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, metrics, random }),
        })
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &AppMetrics {
        &self.inner.metrics
    }

    pub fn random(&self) -> &dyn RandomSource {
        self.inner.random.as_ref()
    }

    /// Sampler wired to this state's gauge, RNG, and config bound.
    pub fn active_users_sampler(&self) -> ActiveUsersSampler {
        ActiveUsersSampler::new(
            Arc::clone(&self.inner.metrics.active_users),
            Arc::clone(&self.inner.random),
            self.inner.cfg.sampler.max_active_users,
        )
    }
}
