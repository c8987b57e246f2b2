//! The two instruments this service exports, registered once at startup.

use std::sync::Arc;

use lumen_core::error::Result;
use lumen_core::metrics::{CounterVec, Gauge, Registry};

pub const REQUESTS_TOTAL: &str = "app_requests_total";
pub const ACTIVE_USERS: &str = "app_active_users";

/// `app_requests_total` label values.
pub mod labels {
    pub const HOME: &str = "home";
    pub const RANDOM: &str = "random";
    pub const SUCCESS: &str = "success";
    pub const ERROR: &str = "error";
}

pub struct AppMetrics {
    registry: Registry,
    /// Labels: `[endpoint, status]`.
    pub requests: Arc<CounterVec<2>>,
    pub active_users: Arc<Gauge>,
}

impl AppMetrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();
        let requests = registry.register_counter_vec(
            REQUESTS_TOTAL,
            "Number of requests to each endpoint",
            ["endpoint", "status"],
        )?;
        let active_users =
            registry.register_gauge(ACTIVE_USERS, "Simulated number of active users")?;
        Ok(Self { registry, requests, active_users })
    }

    /// Registry holding both families, for export.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
