use std::path::PathBuf;

use thiserror::Error;

/// Error type used across the crate.
///
/// Every variant is raised where the problem is detected and travels
/// unchanged up to the binary, which prints it and exits with status 1.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("file {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A spec string did not split into the expected number of segments.
    #[error("{kind} must be in the format: {shape}")]
    Format {
        kind: &'static str,
        shape: &'static str,
    },

    #[error("unsupported operator: {0}")]
    UnsupportedOperator(String),

    #[error("unsupported aggregation function: {0}")]
    UnsupportedFunction(String),

    #[error("column '{0}' not found in data")]
    UnknownColumn(String),

    #[error("column '{0}' has no numeric values to aggregate")]
    NoNumericData(String),

    #[error("rendering failed: {0}")]
    Render(#[from] arrow::error::ArrowError),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = ProcessorError> = std::result::Result<T, E>;
