pub mod defs;

pub use defs::{DepartmentDef, MetricDef, catalog};

/// Fixed set of departments. Variant order is catalog order and drives
/// report row ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Department {
    Sales,
    Marketing,
    Operations,
    Legal,
    PeopleDevelopment,
    AccountsFinance,
}

pub const ALL_DEPARTMENTS: [Department; 6] = [
    Department::Sales,
    Department::Marketing,
    Department::Operations,
    Department::Legal,
    Department::PeopleDevelopment,
    Department::AccountsFinance,
];

impl Department {
    pub fn name(&self) -> &'static str {
        match self {
            Department::Sales => "Sales",
            Department::Marketing => "Marketing",
            Department::Operations => "Operations",
            Department::Legal => "Legal",
            Department::PeopleDevelopment => "People Development",
            Department::AccountsFinance => "Accounts & Finance",
        }
    }

    pub fn from_name(name: &str) -> Option<Department> {
        ALL_DEPARTMENTS.iter().copied().find(|d| d.name() == name)
    }

    pub fn def(&self) -> &'static DepartmentDef {
        let idx = ALL_DEPARTMENTS
            .iter()
            .position(|d| d == self)
            .unwrap_or(0);
        &catalog()[idx]
    }

    /// Catalog metric names for this department, in display order.
    pub fn metric_names(&self) -> impl Iterator<Item = &'static str> {
        self.def().metrics.iter().map(|m| m.name)
    }
}

/// Whether a metric name is flagged inverse (lower raw value = better).
/// The flag is fixed by the metric's identity in the catalog; names not in
/// the catalog are never inverse.
pub fn metric_is_inverse(name: &str) -> bool {
    catalog()
        .iter()
        .flat_map(|d| d.metrics.iter())
        .any(|m| m.name == name && m.inverse)
}
