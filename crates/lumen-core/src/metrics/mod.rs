//! In-process metric instruments with Prometheus text exposition.
//!
//! Instruments are created through a [`Registry`], which rejects duplicate
//! names and owns the export order. Each series is a lone atomic behind a
//! `DashMap` entry so handlers and background jobs can update concurrently
//! without any lock being visible to callers.

mod counter;
mod gauge;
mod registry;
mod text;

pub use counter::CounterVec;
pub use gauge::Gauge;
pub use registry::Registry;

/// Exposition `# TYPE` of a metric family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Counter,
    Gauge,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
        }
    }
}

/// A metric family the registry can serialize.
pub trait Collect: Send + Sync {
    fn name(&self) -> &str;
    fn help(&self) -> &str;
    fn kind(&self) -> MetricKind;
    /// Sample lines (no `# HELP` / `# TYPE` header) for the current state.
    fn samples(&self) -> Vec<String>;
}
