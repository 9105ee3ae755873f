use std::collections::BTreeMap;

use crate::catalog::Department;
use crate::store::WeightRegistry;

/// Weighted CEO index over department averages, in [0,100].
///
/// Each department contributes `(weight / total_weight) * average`, so the
/// weighting is proportional to whatever total is currently set, not to a
/// fixed 100. A zero total defines the index as 0. Pure function: no state,
/// same inputs always produce the same index.
pub fn ceo_index(averages: &BTreeMap<Department, f64>, weights: &WeightRegistry) -> f64 {
    let total = weights.total_weight();
    if total == 0.0 {
        return 0.0;
    }
    averages
        .iter()
        .map(|(dept, avg)| (weights.weight(*dept) / total) * avg)
        .sum()
}
