use std::collections::BTreeMap;

use crate::catalog::{ALL_DEPARTMENTS, Department, defs::SEED_VALUE};
use crate::engine::{ceo_index, department_averages};
use crate::store::{MetricStore, WeightRegistry};

/// One dashboard session: a metric store and a weight registry, constructed
/// explicitly at session start and passed by reference to whoever needs
/// them. The two hold no shared mutable state, so editing a weight never
/// moves a department's average and vice versa.
#[derive(Debug, Clone)]
pub struct Session {
    pub store: MetricStore,
    pub weights: WeightRegistry,
}

impl Session {
    /// Fresh session: every catalog department fully populated with its
    /// catalog metrics at the seed value, every weight at 0.
    pub fn seed() -> Self {
        let mut store = MetricStore::new();
        for dept in ALL_DEPARTMENTS {
            let metrics = dept
                .metric_names()
                .map(|name| (name.to_string(), SEED_VALUE))
                .collect();
            store.replace_department(dept, metrics);
        }
        Self {
            store,
            weights: WeightRegistry::new(),
        }
    }

    pub fn averages(&self) -> BTreeMap<Department, f64> {
        department_averages(&self.store)
    }

    pub fn ceo_index(&self) -> f64 {
        ceo_index(&self.averages(), &self.weights)
    }
}
