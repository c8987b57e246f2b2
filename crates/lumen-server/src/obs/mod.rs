//! Observability wiring: the application's metric set and log subscriber.

pub mod logging;
pub mod metrics;

pub use metrics::AppMetrics;
