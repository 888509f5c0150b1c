//! Error types for document generation and serialization.

use thiserror::Error;

/// Errors that can occur while generating or serializing a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to serialize the document to JSON.
    #[error("Failed to serialize document: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The generator failed to produce a document.
    #[error("Document generation failed: {reason}")]
    Generation {
        /// The reason generation failed.
        reason: String,
    },

    /// A document processor rejected or failed to transform the document.
    #[error("Processor '{name}' failed: {reason}")]
    Processor {
        /// The name of the failing processor.
        name: String,
        /// The reason the processor failed.
        reason: String,
    },
}

impl DocumentError {
    /// Create a generation error from any displayable reason.
    pub fn generation(reason: impl Into<String>) -> Self {
        Self::Generation {
            reason: reason.into(),
        }
    }

    /// Create a processor error.
    pub fn processor(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Processor {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_error() {
        let err: DocumentError = serde_json::from_str::<String>("invalid")
            .unwrap_err()
            .into();
        assert!(matches!(err, DocumentError::Serialization(_)));
        assert!(err.to_string().contains("serialize"));
    }

    #[test]
    fn test_generation_error() {
        let err = DocumentError::generation("no services registered");
        assert!(err.to_string().contains("no services registered"));
    }

    #[test]
    fn test_processor_error() {
        let err = DocumentError::processor("security-filter", "missing scheme");
        assert!(err.to_string().contains("security-filter"));
        assert!(err.to_string().contains("missing scheme"));
    }
}
