use std::collections::BTreeMap;

use crate::catalog::{Department, metric_is_inverse};
use crate::store::{DepartmentData, clamp_value};

/// Raw metric values per department. Lookups are total over the catalog
/// domain: a department with no data yields an empty map rather than an
/// error. Raw storage is always the un-normalized value; the inverse
/// transform is applied on read.
#[derive(Debug, Clone, Default)]
pub struct MetricStore {
    data: BTreeMap<Department, DepartmentData>,
}

impl MetricStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one metric's raw value, clamped into [0,100]. A department
    /// holding a precomputed average converts to per-metric shape: the
    /// edit invalidates the source's aggregate, so the riding-along raw
    /// metrics become the base map and the average is discarded.
    pub fn set_metric(&mut self, dept: Department, metric: &str, raw_value: f64) {
        let value = clamp_value(raw_value);
        let mut metrics = match self.data.remove(&dept) {
            Some(DepartmentData::Average { metrics, .. }) => metrics,
            Some(DepartmentData::Metrics(metrics)) => metrics,
            None => BTreeMap::new(),
        };
        metrics.insert(metric.to_string(), value);
        self.data.insert(dept, DepartmentData::Metrics(metrics));
    }

    /// Raw metric map for one department; empty when absent.
    pub fn metrics(&self, dept: Department) -> BTreeMap<String, f64> {
        self.data
            .get(&dept)
            .map(|d| d.raw_metrics().clone())
            .unwrap_or_default()
    }

    /// Raw metrics with the inverse transform applied: `100 - raw` for
    /// catalog metrics flagged inverse, pass-through for everything else.
    pub fn normalized(&self, dept: Department) -> BTreeMap<String, f64> {
        self.metrics(dept)
            .into_iter()
            .map(|(name, raw)| {
                let value = if metric_is_inverse(&name) {
                    100.0 - raw
                } else {
                    raw
                };
                (name, value)
            })
            .collect()
    }

    /// Atomically overwrite a department's entire metric set. Each value is
    /// clamped on entry. Partial updates go through `set_metric` per key.
    pub fn replace_department(&mut self, dept: Department, new_metrics: BTreeMap<String, f64>) {
        let metrics = new_metrics
            .into_iter()
            .map(|(name, v)| (name, clamp_value(v)))
            .collect();
        self.data.insert(dept, DepartmentData::Metrics(metrics));
    }

    /// Atomically replace a department's data with an already-resolved
    /// variant, clamping metric values on entry. Used by the refresh path,
    /// which may carry a precomputed average.
    pub fn replace_data(&mut self, dept: Department, mut data: DepartmentData) {
        data.clamp_metrics();
        self.data.insert(dept, data);
    }

    /// Resolved data for one department, if any has been loaded.
    pub fn data(&self, dept: Department) -> Option<&DepartmentData> {
        self.data.get(&dept)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Department, &DepartmentData)> {
        self.data.iter().map(|(d, v)| (*d, v))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/store/metrics.rs"]
mod tests;
