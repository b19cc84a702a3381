//! Catalogue file loading.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use qualcat_model::RawQualification;

use crate::error::{IngestError, Result};

/// Load a catalogue from a JSON file.
///
/// The file must contain a top-level array of qualification objects.
/// Unknown keys are ignored and malformed optional fields decode as absent;
/// only structural problems (missing file, invalid JSON, wrong top-level
/// shape, non-object records) are errors.
pub fn load_catalogue(path: &Path) -> Result<Vec<RawQualification>> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => IngestError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let records = parse_catalogue(&content, path)?;
    tracing::debug!(
        path = %path.display(),
        records = records.len(),
        "Loaded catalogue"
    );
    Ok(records)
}

/// Parse catalogue JSON already in memory. `path` is only used in errors.
pub fn parse_catalogue(content: &str, path: &Path) -> Result<Vec<RawQualification>> {
    let value: Value = serde_json::from_str(content).map_err(|source| IngestError::JsonParse {
        path: path.to_path_buf(),
        source,
    })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(IngestError::NotAnArray {
                path: path.to_path_buf(),
                found: json_kind(&other),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            RawQualification::deserialize(item).map_err(|source| IngestError::InvalidRecord {
                path: path.to_path_buf(),
                index,
                source,
            })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
