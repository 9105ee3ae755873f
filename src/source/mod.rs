use thiserror::Error;

pub mod payload;
pub mod snapshot;

pub use payload::{SummaryPayload, apply_summary};
pub use snapshot::{SNAPSHOT_KEY, read_snapshot, snapshot_path, write_snapshot};

/// Boundary errors only. Invalid numeric values are never an error here;
/// they are clamped or coerced by the store on entry.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),
}
