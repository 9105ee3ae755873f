use std::fs;
use std::path::{Path, PathBuf};

use crate::session::Session;
use crate::source::payload::SummaryPayload;
use crate::source::SourceError;

/// Fixed persistence key carried over from the browser build; the snapshot
/// is the single `<key>.json` document under the snapshot directory.
pub const SNAPSHOT_KEY: &str = "unimarks-kra-kpi-v1";

pub fn snapshot_path(dir: &Path) -> PathBuf {
    dir.join(format!("{SNAPSHOT_KEY}.json"))
}

/// Load the persisted `{weights, data}` snapshot, if one exists. Used only
/// when the remote summary is unavailable.
pub fn read_snapshot(path: &Path) -> Result<Option<SummaryPayload>, SourceError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Persist the session wholesale. Called after every state change; the
/// snapshot is never partially updated.
pub fn write_snapshot(path: &Path, session: &Session) -> Result<(), SourceError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let payload = SummaryPayload::from_session(session);
    let json = serde_json::to_string_pretty(&payload)?;
    fs::write(path, json)?;
    Ok(())
}
