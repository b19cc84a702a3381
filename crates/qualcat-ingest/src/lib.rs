//! Source catalogue ingestion.
//!
//! Reads the JSON qualification catalogue into [`RawQualification`] records.
//!
//! [`RawQualification`]: qualcat_model::RawQualification

pub mod error;
pub mod loader;

pub use error::{IngestError, Result};
pub use loader::{load_catalogue, parse_catalogue};
