//! Error types for catalogue ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a source catalogue.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Catalogue file not found.
    #[error("catalogue file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === JSON Errors ===
    /// File content is not valid JSON.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Top-level JSON value is not an array of records.
    #[error("expected a JSON array of qualifications in {path}, found {found}")]
    NotAnArray { path: PathBuf, found: &'static str },

    /// An array element could not be read as a qualification object.
    #[error("invalid qualification record {index} in {path}: {source}")]
    InvalidRecord {
        path: PathBuf,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
