pub mod csv;
pub mod text;

use crate::catalog::{ALL_DEPARTMENTS, Department};
use crate::engine::department_average;
use crate::session::Session;

/// One row of the metric section: department, metric name or the literal
/// `Average`, value.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub department: &'static str,
    pub label: RowLabel,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowLabel {
    Average,
    Metric(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightRow {
    pub department: &'static str,
    pub weight: f64,
}

/// One-way projection of the current state for export. Not an
/// invariant-bearing structure; there is no import path back.
#[derive(Debug, Clone)]
pub struct ReportTable {
    pub metric_rows: Vec<MetricRow>,
    pub weight_rows: Vec<WeightRow>,
}

/// Flatten the session in catalog order: per department with data, one
/// Average row followed by one row per raw (un-normalized) metric value,
/// catalog metrics first, any extra names after in sorted order. The second
/// logical table carries one weight row per catalog department.
pub fn build_table(session: &Session) -> ReportTable {
    let mut metric_rows = Vec::new();
    for dept in ALL_DEPARTMENTS {
        if session.store.data(dept).is_none() {
            continue;
        }
        metric_rows.push(MetricRow {
            department: dept.name(),
            label: RowLabel::Average,
            value: department_average(&session.store, dept),
        });
        push_metric_rows(&mut metric_rows, dept, session);
    }

    let weight_rows = session
        .weights
        .iter()
        .map(|(dept, weight)| WeightRow {
            department: dept.name(),
            weight,
        })
        .collect();

    ReportTable {
        metric_rows,
        weight_rows,
    }
}

fn push_metric_rows(rows: &mut Vec<MetricRow>, dept: Department, session: &Session) {
    let mut raw = session.store.metrics(dept);
    for name in dept.metric_names() {
        if let Some(value) = raw.remove(name) {
            rows.push(MetricRow {
                department: dept.name(),
                label: RowLabel::Metric(name.to_string()),
                value,
            });
        }
    }
    // Leftovers are names outside the catalog definition; BTreeMap order.
    for (name, value) in raw {
        rows.push(MetricRow {
            department: dept.name(),
            label: RowLabel::Metric(name),
            value,
        });
    }
}

/// Render a value the way the dashboard did: integral values without a
/// decimal point, everything else in full.
pub fn format_value(v: f64) -> String {
    format!("{v}")
}
