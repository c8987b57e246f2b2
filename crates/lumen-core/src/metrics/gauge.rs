use std::sync::atomic::{AtomicU64, Ordering};

use super::text::{escape_help, format_value, validate_metric_name};
use super::{Collect, MetricKind};
use crate::error::Result;

/// Single floating-point value, overwritten on every `set`.
///
/// Stored as the `f64` bit pattern in an `AtomicU64`.
pub struct Gauge {
    name: String,
    help: String,
    bits: AtomicU64,
}

impl Gauge {
    pub(crate) fn new(name: &str, help: &str) -> Result<Self> {
        validate_metric_name(name)?;
        Ok(Self {
            name: name.to_string(),
            help: escape_help(help),
            bits: AtomicU64::new(0f64.to_bits()),
        })
    }

    pub fn set(&self, v: f64) {
        self.bits.store(v.to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

impl Collect for Gauge {
    fn name(&self) -> &str {
        &self.name
    }

    fn help(&self) -> &str {
        &self.help
    }

    fn kind(&self) -> MetricKind {
        MetricKind::Gauge
    }

    fn samples(&self) -> Vec<String> {
        vec![format!("{} {}", self.name, format_value(self.get()))]
    }
}
