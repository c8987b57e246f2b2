use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::{Collect, CounterVec, Gauge};
use crate::error::{LumenError, Result};

/// Named collection of metric families.
///
/// Create one at startup and share it (it is `Send + Sync`); the handles
/// returned by `register_*` update their series without touching the registry
/// again.
#[derive(Default)]
pub struct Registry {
    families: DashMap<String, Arc<dyn Collect>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a counter partitioned by `label_names`.
    pub fn register_counter_vec<const N: usize>(
        &self,
        name: &str,
        help: &str,
        label_names: [&str; N],
    ) -> Result<Arc<CounterVec<N>>> {
        let counter = Arc::new(CounterVec::new(name, help, label_names)?);
        self.insert(Arc::clone(&counter) as Arc<dyn Collect>)?;
        Ok(counter)
    }

    /// Register a single unlabeled gauge.
    pub fn register_gauge(&self, name: &str, help: &str) -> Result<Arc<Gauge>> {
        let gauge = Arc::new(Gauge::new(name, help)?);
        self.insert(Arc::clone(&gauge) as Arc<dyn Collect>)?;
        Ok(gauge)
    }

    fn insert(&self, family: Arc<dyn Collect>) -> Result<()> {
        match self.families.entry(family.name().to_string()) {
            Entry::Occupied(e) => Err(LumenError::AlreadyRegistered(e.key().clone())),
            Entry::Vacant(e) => {
                tracing::debug!(metric = %family.name(), kind = family.kind().as_str(), "metric registered");
                e.insert(family);
                Ok(())
            }
        }
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.families.contains_key(name)
    }

    /// Exposition lines for the current state, families in name order.
    ///
    /// The family list is snapshotted up front; each family's series are read
    /// only when the iterator reaches it. Every call starts a fresh pass.
    pub fn export(&self) -> impl Iterator<Item = String> {
        let mut families: Vec<Arc<dyn Collect>> =
            self.families.iter().map(|r| Arc::clone(r.value())).collect();
        families.sort_by(|a, b| a.name().cmp(b.name()));

        families.into_iter().flat_map(|family| {
            let mut lines = Vec::with_capacity(2);
            lines.push(format!("# HELP {} {}", family.name(), family.help()));
            lines.push(format!("# TYPE {} {}", family.name(), family.kind().as_str()));
            lines.extend(family.samples());
            lines
        })
    }

    /// Full exposition body, newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in self.export() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_names_fail() {
        let reg = Registry::new();
        reg.register_counter_vec("a_total", "a", ["x"]).unwrap();

        let err = reg.register_gauge("a_total", "again").err().unwrap();
        assert_eq!(err.code(), "ALREADY_REGISTERED");
        let err = reg.register_counter_vec("a_total", "again", ["y"]).err().unwrap();
        assert!(matches!(err, LumenError::AlreadyRegistered(n) if n == "a_total"));
    }

    #[test]
    fn invalid_registration_leaves_name_free() {
        let reg = Registry::new();
        assert!(reg.register_counter_vec("c_total", "c", ["bad-label"]).is_err());
        assert!(!reg.is_registered("c_total"));
        assert!(reg.register_counter_vec("c_total", "c", ["good"]).is_ok());
    }

    #[test]
    fn export_orders_families_by_name() {
        let reg = Registry::new();
        let g = reg.register_gauge("zz_gauge", "last").unwrap();
        let c = reg.register_counter_vec("aa_total", "first", ["k"]).unwrap();
        c.inc(["v"]);
        g.set(2.5);

        let lines: Vec<String> = reg.export().collect();
        assert_eq!(
            lines,
            vec![
                "# HELP aa_total first",
                "# TYPE aa_total counter",
                r#"aa_total{k="v"} 1"#,
                "# HELP zz_gauge last",
                "# TYPE zz_gauge gauge",
                "zz_gauge 2.5",
            ]
        );
    }

    #[test]
    fn export_is_restartable_and_sees_new_state() {
        let reg = Registry::new();
        let c = reg.register_counter_vec("n_total", "n", ["k"]).unwrap();
        c.inc(["a"]);

        let first = reg.render();
        assert_eq!(first, reg.render());

        c.inc(["a"]);
        let third = reg.render();
        assert_ne!(first, third);
        assert!(third.contains(r#"n_total{k="a"} 2"#));
    }

    #[test]
    fn empty_counter_still_has_header() {
        let reg = Registry::new();
        reg.register_counter_vec("idle_total", "idle", ["k"]).unwrap();
        assert_eq!(reg.render(), "# HELP idle_total idle\n# TYPE idle_total counter\n");
    }
}
