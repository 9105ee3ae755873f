use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::Department;
use crate::session::Session;
use crate::source::SourceError;
use crate::store::DepartmentData;

/// Wire shape of the remote summary endpoint and of the persisted snapshot:
/// per-department data (either shape of `DepartmentData`) plus a flat
/// department-name → weight map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryPayload {
    #[serde(default)]
    pub data: BTreeMap<String, DepartmentData>,
    #[serde(default)]
    pub weights: BTreeMap<String, f64>,
}

impl SummaryPayload {
    /// Current session state in wire shape, used when persisting.
    pub fn from_session(session: &Session) -> Self {
        let data = session
            .store
            .iter()
            .map(|(dept, d)| (dept.name().to_string(), d.clone()))
            .collect();
        let weights = session
            .weights
            .iter()
            .map(|(dept, w)| (dept.name().to_string(), w))
            .collect();
        Self { data, weights }
    }
}

pub fn read_summary(path: &Path) -> Result<SummaryPayload, SourceError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Apply a refresh payload to the session. Each department is an atomic
/// whole-set replace; nothing is merged with in-memory state. Names outside
/// the catalog are logged and skipped. Parse failures happen before this is
/// called, so a bad payload mutates nothing.
pub fn apply_summary(session: &mut Session, payload: SummaryPayload) {
    for (name, data) in payload.data {
        match Department::from_name(&name) {
            Some(dept) => session.store.replace_data(dept, data),
            None => tracing::warn!(department = %name, "skipping unknown department in payload"),
        }
    }
    for (name, weight) in payload.weights {
        match Department::from_name(&name) {
            Some(dept) => session.weights.set_weight(dept, weight),
            None => tracing::warn!(department = %name, "skipping weight for unknown department"),
        }
    }
}
