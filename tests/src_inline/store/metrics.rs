use super::*;

use std::collections::BTreeMap;

#[test]
fn test_set_then_get_is_clamped() {
    let mut store = MetricStore::new();
    for (input, expected) in [
        (55.0, 55.0),
        (-3.0, 0.0),
        (100.0, 100.0),
        (150.0, 100.0),
        (0.0, 0.0),
    ] {
        store.set_metric(Department::Sales, "Deal Conversion Rate", input);
        assert_eq!(
            store.metrics(Department::Sales).get("Deal Conversion Rate"),
            Some(&expected),
            "input {input}"
        );
    }
}

#[test]
fn test_non_finite_coerces_to_zero() {
    let mut store = MetricStore::new();
    for input in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        store.set_metric(Department::Sales, "Average Deal Size", input);
        assert_eq!(
            store.metrics(Department::Sales).get("Average Deal Size"),
            Some(&0.0)
        );
    }
}

#[test]
fn test_normalized_applies_inverse_transform() {
    let mut store = MetricStore::new();
    store.set_metric(Department::Operations, "Error/Defect Rate (Low=Good)", 40.0);
    store.set_metric(Department::Operations, "Process Compliance Rate", 80.0);

    let normalized = store.normalized(Department::Operations);
    assert_eq!(normalized.get("Error/Defect Rate (Low=Good)"), Some(&60.0));
    assert_eq!(normalized.get("Process Compliance Rate"), Some(&80.0));

    // Raw storage stays un-normalized.
    let raw = store.metrics(Department::Operations);
    assert_eq!(raw.get("Error/Defect Rate (Low=Good)"), Some(&40.0));
}

#[test]
fn test_mutation_never_touches_siblings_or_other_departments() {
    let mut store = MetricStore::new();
    store.set_metric(Department::Sales, "New Client Acquisition", 50.0);
    store.set_metric(Department::Sales, "Client Retention %", 70.0);
    store.set_metric(Department::Legal, "Quality Review Score", 90.0);

    store.set_metric(Department::Sales, "New Client Acquisition", 10.0);

    assert_eq!(
        store.metrics(Department::Sales).get("Client Retention %"),
        Some(&70.0)
    );
    assert_eq!(
        store.metrics(Department::Legal).get("Quality Review Score"),
        Some(&90.0)
    );
}

#[test]
fn test_absent_department_yields_empty_map() {
    let store = MetricStore::new();
    assert!(store.metrics(Department::Marketing).is_empty());
    assert!(store.normalized(Department::Marketing).is_empty());
    assert!(store.data(Department::Marketing).is_none());
}

#[test]
fn test_replace_department_is_whole_set() {
    let mut store = MetricStore::new();
    store.set_metric(Department::Legal, "Success Rate in Matters", 55.0);
    store.set_metric(Department::Legal, "Timeliness of Filings", 65.0);

    let replacement = BTreeMap::from([
        ("Quality Review Score".to_string(), 88.0),
        ("High-value Case Wins".to_string(), 120.0),
    ]);
    store.replace_department(Department::Legal, replacement);

    let metrics = store.metrics(Department::Legal);
    assert_eq!(metrics.len(), 2);
    assert!(!metrics.contains_key("Success Rate in Matters"));
    // Values are clamped on entry like any other mutation.
    assert_eq!(metrics.get("High-value Case Wins"), Some(&100.0));
}

#[test]
fn test_set_metric_converts_precomputed_shape() {
    let mut store = MetricStore::new();
    store.replace_data(
        Department::Sales,
        DepartmentData::Average {
            average: 70.0,
            metrics: BTreeMap::from([("Deal Conversion Rate".to_string(), 60.0)]),
        },
    );

    store.set_metric(Department::Sales, "Client Retention %", 90.0);

    match store.data(Department::Sales) {
        Some(DepartmentData::Metrics(metrics)) => {
            assert_eq!(metrics.get("Deal Conversion Rate"), Some(&60.0));
            assert_eq!(metrics.get("Client Retention %"), Some(&90.0));
        }
        other => panic!("expected per-metric shape, got {other:?}"),
    }
}

#[test]
fn test_replace_data_clamps_metrics_but_not_average() {
    let mut store = MetricStore::new();
    store.replace_data(
        Department::Marketing,
        DepartmentData::Average {
            average: 72.5,
            metrics: BTreeMap::from([("Brand Visibility Index".to_string(), 300.0)]),
        },
    );
    match store.data(Department::Marketing) {
        Some(DepartmentData::Average { average, metrics }) => {
            assert_eq!(*average, 72.5);
            assert_eq!(metrics.get("Brand Visibility Index"), Some(&100.0));
        }
        other => panic!("expected average shape, got {other:?}"),
    }
}
