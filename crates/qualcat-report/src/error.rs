//! Report generation error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering or writing the generated module.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Records could not be serialized to JSON.
    #[error("failed to serialize qualifications")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// File I/O error.
    #[error("failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The temporary file could not be moved over the target.
    #[error("failed to replace {target_path} with {temp_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
