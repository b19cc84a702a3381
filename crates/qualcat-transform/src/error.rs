//! Error types for catalogue transformation.

use thiserror::Error;

/// Errors that abort a catalogue transformation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// A record has no usable title, so no identifier or faculty can be derived.
    #[error("record {index} has no title")]
    MissingTitle { index: usize },
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TransformError::MissingTitle { index: 4 };
        assert_eq!(err.to_string(), "record 4 has no title");
    }
}
