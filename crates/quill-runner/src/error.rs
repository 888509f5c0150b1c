//! Error types for specification loading and execution.

use std::path::PathBuf;
use thiserror::Error;

use quill_document::DocumentError;

/// Errors that can occur while loading or executing a document spec.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The specification file could not be read.
    #[error("Failed to read document spec '{path}': {source}")]
    Load {
        /// Path of the specification file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The specification file is not valid JSON for the expected shape.
    #[error("Malformed document spec '{path}': {source}")]
    Parse {
        /// Path of the specification file.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Generation or serialization failed while executing the spec.
    #[error(transparent)]
    Generation(#[from] DocumentError),

    /// Writing a generated output file failed.
    #[error("Failed to write output '{path}': {source}")]
    Output {
        /// Path of the output file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for runner operations.
pub type RunnerResult<T> = Result<T, RunnerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_names_path() {
        let err = RunnerError::Load {
            path: PathBuf::from("missing.quill"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.quill"));
    }

    #[test]
    fn test_generation_error_is_transparent() {
        let err: RunnerError = DocumentError::generation("bad descriptor").into();
        assert!(err.to_string().contains("bad descriptor"));
    }
}
