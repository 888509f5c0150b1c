//! Document processors: ordered, in-place document transformations.

use quill_document::{Document, DocumentResult};

/// A pipeline stage that mutates a generated document in place.
///
/// Processors run strictly sequentially in their configured order, after
/// request-context enrichment and before serialization. Each processor
/// observes the mutations of every processor before it; the order is a
/// user-visible contract.
pub trait DocumentProcessor: Send + Sync {
    /// Returns the name of this processor, used for logging and errors.
    fn name(&self) -> &'static str;

    /// Transform the document in place.
    fn process(&self, document: &mut Document) -> DocumentResult<()>;
}

/// A processor created from a plain function.
///
/// ```
/// use quill_document::{Document, DocumentResult};
/// use quill_middleware::FnProcessor;
///
/// let strip_host = FnProcessor::new("strip-host", |document: &mut Document| -> DocumentResult<()> {
///     document.host.clear();
///     Ok(())
/// });
/// ```
pub struct FnProcessor<F> {
    name: &'static str,
    func: F,
}

impl<F> FnProcessor<F> {
    /// Creates a new function-based processor.
    pub const fn new(name: &'static str, func: F) -> Self {
        Self { name, func }
    }
}

impl<F> DocumentProcessor for FnProcessor<F>
where
    F: Fn(&mut Document) -> DocumentResult<()> + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn process(&self, document: &mut Document) -> DocumentResult<()> {
        (self.func)(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_document::DocumentError;

    #[test]
    fn test_fn_processor_mutates_document() {
        let processor = FnProcessor::new("set-description", |document: &mut Document| {
            document.info.description = Some("processed".to_string());
            Ok(())
        });

        let mut document = Document::new("Test API", "1.0.0");
        processor.process(&mut document).unwrap();
        assert_eq!(document.info.description.as_deref(), Some("processed"));
        assert_eq!(processor.name(), "set-description");
    }

    #[test]
    fn test_fn_processor_propagates_error() {
        let processor = FnProcessor::new("reject", |_document: &mut Document| {
            Err(DocumentError::processor("reject", "always fails"))
        });

        let mut document = Document::new("Test API", "1.0.0");
        assert!(processor.process(&mut document).is_err());
    }
}
