use super::*;

use std::collections::BTreeMap;

#[test]
fn test_zero_metrics_average_is_exactly_zero() {
    let store = MetricStore::new();
    assert_eq!(department_average(&store, Department::Sales), 0.0);

    let mut store = MetricStore::new();
    store.replace_department(Department::Sales, BTreeMap::new());
    assert_eq!(department_average(&store, Department::Sales), 0.0);
}

#[test]
fn test_mean_of_normalized_values() {
    // Inverse 40 normalizes to 60, plain 80 passes through: average 70.
    let mut store = MetricStore::new();
    store.set_metric(Department::Operations, "Error/Defect Rate (Low=Good)", 40.0);
    store.set_metric(Department::Operations, "Process Compliance Rate", 80.0);
    let avg = department_average(&store, Department::Operations);
    assert!((avg - 70.0).abs() < 1e-9);
}

#[test]
fn test_precomputed_average_used_verbatim() {
    let mut store = MetricStore::new();
    store.replace_data(
        Department::Legal,
        DepartmentData::Average {
            average: 72.5,
            metrics: BTreeMap::from([("Quality Review Score".to_string(), 10.0)]),
        },
    );
    // The riding-along metric map never enters the computation.
    assert_eq!(department_average(&store, Department::Legal), 72.5);
}

#[test]
fn test_partial_metric_set_averages_present_only() {
    // 2 of the 5 catalog metrics supplied: mean over the 2 present.
    let mut store = MetricStore::new();
    store.replace_department(
        Department::Sales,
        BTreeMap::from([
            ("New Client Acquisition".to_string(), 40.0),
            ("Client Retention %".to_string(), 60.0),
        ]),
    );
    assert!((department_average(&store, Department::Sales) - 50.0).abs() < 1e-9);
}

#[test]
fn test_averages_cover_whole_catalog() {
    let mut store = MetricStore::new();
    store.set_metric(Department::Marketing, "Qualified Leads Generated", 44.0);
    let averages = department_averages(&store);
    assert_eq!(averages.len(), ALL_DEPARTMENTS.len());
    assert_eq!(averages.get(&Department::Marketing), Some(&44.0));
    // Departments with no data score 0, never NaN.
    assert_eq!(averages.get(&Department::Legal), Some(&0.0));
}

#[test]
fn test_average_stays_in_range() {
    let mut store = MetricStore::new();
    for name in Department::AccountsFinance.metric_names() {
        store.set_metric(Department::AccountsFinance, name, 100.0);
    }
    let avg = department_average(&store, Department::AccountsFinance);
    assert!((0.0..=100.0).contains(&avg));
}
