use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use super::text::{escape_help, series_ident, validate_label_name, validate_metric_name};
use super::{Collect, MetricKind};
use crate::error::{LumenError, Result};

/// Monotonic counter partitioned by `N` label values.
///
/// Label arity is part of the type, so `inc` cannot be called with the wrong
/// number of values. Values are matched positionally to the label names given
/// at registration.
pub struct CounterVec<const N: usize> {
    name: String,
    help: String,
    label_names: [String; N],
    series: DashMap<[String; N], AtomicU64>,
}

impl<const N: usize> CounterVec<N> {
    pub(crate) fn new(name: &str, help: &str, label_names: [&str; N]) -> Result<Self> {
        validate_metric_name(name)?;
        for (i, label) in label_names.iter().enumerate() {
            validate_label_name(label)?;
            if label_names[..i].contains(label) {
                return Err(LumenError::DuplicateLabel((*label).to_string()));
            }
        }
        Ok(Self {
            name: name.to_string(),
            help: escape_help(help),
            label_names: label_names.map(str::to_owned),
            series: DashMap::new(),
        })
    }

    /// Increment by 1.
    pub fn inc(&self, values: [&str; N]) {
        self.add(values, 1);
    }

    /// Increment by an arbitrary amount.
    pub fn add(&self, values: [&str; N], v: u64) {
        let key = values.map(str::to_owned);
        let counter = self.series.entry(key).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current count for one label combination (0 when never incremented).
    pub fn get(&self, values: [&str; N]) -> u64 {
        let key = values.map(str::to_owned);
        self.series
            .get(&key)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Sum over every series.
    pub fn total(&self) -> u64 {
        self.series.iter().map(|r| r.value().load(Ordering::Relaxed)).sum()
    }
}

impl<const N: usize> Collect for CounterVec<N> {
    fn name(&self) -> &str {
        &self.name
    }

    fn help(&self) -> &str {
        &self.help
    }

    fn kind(&self) -> MetricKind {
        MetricKind::Counter
    }

    fn samples(&self) -> Vec<String> {
        let mut rows: Vec<([String; N], u64)> = self
            .series
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Relaxed)))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));

        rows.into_iter()
            .map(|(values, count)| {
                let labels: Vec<(&str, &str)> = self
                    .label_names
                    .iter()
                    .map(String::as_str)
                    .zip(values.iter().map(String::as_str))
                    .collect();
                format!("{} {}", series_ident(&self.name, &labels), count)
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn counts_per_label_set() {
        let c = CounterVec::new("hits_total", "hits", ["endpoint", "status"]).unwrap();
        c.inc(["home", "success"]);
        c.inc(["home", "success"]);
        c.inc(["random", "error"]);

        assert_eq!(c.get(["home", "success"]), 2);
        assert_eq!(c.get(["random", "error"]), 1);
        assert_eq!(c.get(["random", "success"]), 0);
        assert_eq!(c.total(), 3);
    }

    #[test]
    fn rejects_duplicate_label_names() {
        let err = CounterVec::new("x_total", "x", ["a", "a"]).err().unwrap();
        assert_eq!(err.code(), "DUPLICATE_LABEL");
    }

    #[test]
    fn rejects_bad_names() {
        assert!(CounterVec::new("bad-name", "x", ["a"]).is_err());
        assert!(CounterVec::new("ok_total", "x", ["__a"]).is_err());
    }

    #[test]
    fn samples_are_sorted_by_label_values() {
        let c = CounterVec::new("req_total", "req", ["endpoint"]).unwrap();
        c.inc(["zeta"]);
        c.add(["alpha"], 5);
        assert_eq!(
            c.samples(),
            vec![
                r#"req_total{endpoint="alpha"} 5"#.to_string(),
                r#"req_total{endpoint="zeta"} 1"#.to_string(),
            ]
        );
    }

    #[test]
    fn unlabeled_counter_renders_bare_name() {
        let c = CounterVec::new("ticks_total", "ticks", []).unwrap();
        c.inc([]);
        assert_eq!(c.samples(), vec!["ticks_total 1".to_string()]);
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        let c = std::sync::Arc::new(CounterVec::new("c_total", "c", ["k"]).unwrap());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let c = std::sync::Arc::clone(&c);
                std::thread::spawn(move || {
                    let key = if i % 2 == 0 { "even" } else { "odd" };
                    for _ in 0..1000 {
                        c.inc([key]);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(c.get(["even"]), 4000);
        assert_eq!(c.get(["odd"]), 4000);
    }
}
