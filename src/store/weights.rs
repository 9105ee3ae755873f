use std::collections::BTreeMap;

use crate::catalog::{ALL_DEPARTMENTS, Department};

/// Top-level weight per department, clamped into [0,100] on write. Every
/// catalog department always has exactly one weight; the total is never
/// required to equal 100 and an over/under-subscribed total is reported,
/// not rejected.
#[derive(Debug, Clone)]
pub struct WeightRegistry {
    weights: BTreeMap<Department, f64>,
}

impl WeightRegistry {
    /// All catalog departments start at weight 0.
    pub fn new() -> Self {
        let weights = ALL_DEPARTMENTS.iter().map(|d| (*d, 0.0)).collect();
        Self { weights }
    }

    pub fn set_weight(&mut self, dept: Department, value: f64) {
        self.weights.insert(dept, super::clamp_value(value));
    }

    pub fn weight(&self, dept: Department) -> f64 {
        self.weights.get(&dept).copied().unwrap_or(0.0)
    }

    pub fn total_weight(&self) -> f64 {
        self.weights.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Department, f64)> {
        self.weights.iter().map(|(d, w)| (*d, *w))
    }
}

impl Default for WeightRegistry {
    fn default() -> Self {
        Self::new()
    }
}
