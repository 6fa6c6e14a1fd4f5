//! Output module for run snapshots
//!
//! This module handles:
//! - Assembling the timestamped snapshot of a run
//! - Serializing it to JSON
//! - Writing it to a file

mod snapshot;

pub use snapshot::{strip_control_characters, to_json, write_snapshot, Snapshot};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
