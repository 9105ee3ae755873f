use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod metrics;
pub mod weights;

pub use metrics::MetricStore;
pub use weights::WeightRegistry;

/// Clamp a raw metric or weight value into [0,100]. Non-finite input
/// coerces to 0. Setters never reject input; sliders cannot produce
/// out-of-range values, so clamping is the only defensive measure.
pub fn clamp_value(v: f64) -> f64 {
    if !v.is_finite() {
        return 0.0;
    }
    v.clamp(0.0, 100.0)
}

/// Per-department data, resolved into an explicit variant at the point it
/// enters the store. The remote summary endpoint sends either a precomputed
/// average (optionally with the raw metrics riding along for export) or a
/// flat metric map; serde's untagged representation matches both wire shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DepartmentData {
    Average {
        average: f64,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        metrics: BTreeMap<String, f64>,
    },
    Metrics(BTreeMap<String, f64>),
}

impl DepartmentData {
    /// Raw metric map, whichever variant holds it.
    pub fn raw_metrics(&self) -> &BTreeMap<String, f64> {
        match self {
            DepartmentData::Average { metrics, .. } => metrics,
            DepartmentData::Metrics(metrics) => metrics,
        }
    }

    /// Clamp every stored metric value in place. The precomputed average is
    /// left verbatim; it is the source's own aggregate, not a mutation input.
    pub fn clamp_metrics(&mut self) {
        let metrics = match self {
            DepartmentData::Average { metrics, .. } => metrics,
            DepartmentData::Metrics(metrics) => metrics,
        };
        for value in metrics.values_mut() {
            *value = clamp_value(*value);
        }
    }
}
