use std::collections::BTreeMap;

use crate::catalog::{ALL_DEPARTMENTS, Department};
use crate::store::{DepartmentData, MetricStore};

/// Single score for one department in [0,100].
///
/// Per-metric shape: arithmetic mean of the normalized metric values, over
/// the metrics actually present. Precomputed-average shape: that value
/// verbatim, per-metric computation skipped. Zero metrics (including a
/// department absent from the store) score exactly 0, never NaN.
pub fn department_average(store: &MetricStore, dept: Department) -> f64 {
    match store.data(dept) {
        Some(DepartmentData::Average { average, .. }) => *average,
        Some(DepartmentData::Metrics(_)) => {
            let normalized = store.normalized(dept);
            mean(normalized.values().copied())
        }
        None => 0.0,
    }
}

/// Averages for every catalog department, in catalog order.
pub fn department_averages(store: &MetricStore) -> BTreeMap<Department, f64> {
    ALL_DEPARTMENTS
        .iter()
        .map(|d| (*d, department_average(store, *d)))
        .collect()
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 { 0.0 } else { sum / count as f64 }
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/aggregate.rs"]
mod tests;
