//! Executes loaded document specifications.

use std::sync::Arc;

use tracing::{debug, info};

use quill_document::{DocumentGenerator, ReflectionGenerator};

use crate::error::{RunnerError, RunnerResult};
use crate::spec::DocumentSpec;

/// Runs document specifications through a generator.
///
/// Each execution is independent: the runner holds no cache and shares no
/// state between specs or with the HTTP serving core.
pub struct DocumentRunner {
    generator: Arc<dyn DocumentGenerator>,
}

impl Default for DocumentRunner {
    fn default() -> Self {
        Self::new(Arc::new(ReflectionGenerator::new()))
    }
}

impl DocumentRunner {
    /// Creates a runner backed by the given generator.
    #[must_use]
    pub fn new(generator: Arc<dyn DocumentGenerator>) -> Self {
        Self { generator }
    }

    /// Executes a specification: generate, serialize, write outputs.
    ///
    /// With no outputs configured the document is still generated (useful
    /// for validation) and only logged.
    pub async fn execute(&self, spec: &DocumentSpec) -> RunnerResult<()> {
        let document = self.generator.generate(&spec.services, &spec.settings)?;
        let json = document.to_json()?;

        if spec.outputs.is_empty() {
            info!(
                title = %document.info.title,
                "generated document has no configured outputs"
            );
            return Ok(());
        }

        for output in &spec.outputs {
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|source| RunnerError::Output {
                        path: output.clone(),
                        source,
                    })?;
            }
            tokio::fs::write(output, &json)
                .await
                .map_err(|source| RunnerError::Output {
                    path: output.clone(),
                    source,
                })?;
            debug!(path = %output.display(), "wrote generated document");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_document::{Document, GeneratorSettings, ServiceDescriptor};
    use std::path::PathBuf;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "quill-runner-{tag}-{}-{:?}",
            std::process::id(),
            std::thread::current().id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_execute_writes_outputs() {
        let dir = scratch_dir("outputs");
        let output = dir.join("nested").join("orders.json");

        let spec = DocumentSpec {
            services: vec![ServiceDescriptor::new("OrdersService").endpoint("GET", "/orders")],
            settings: GeneratorSettings::new("Orders API", "1.0.0"),
            outputs: vec![output.clone()],
        };

        DocumentRunner::default().execute(&spec).await.unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        let document: Document = serde_json::from_str(&written).unwrap();
        assert_eq!(document.info.title, "Orders API");
        assert!(document.paths.contains_key("/orders"));

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn test_execute_without_outputs_succeeds() {
        let spec = DocumentSpec {
            services: Vec::new(),
            settings: GeneratorSettings::new("Empty API", "1.0.0"),
            outputs: Vec::new(),
        };

        DocumentRunner::default().execute(&spec).await.unwrap();
    }

    #[tokio::test]
    async fn test_execute_propagates_generation_failure() {
        // The built-in generator rejects unknown HTTP methods.
        let spec = DocumentSpec {
            services: vec![ServiceDescriptor::new("S").endpoint("BREW", "/coffee")],
            settings: GeneratorSettings::default(),
            outputs: Vec::new(),
        };

        let err = DocumentRunner::default().execute(&spec).await.unwrap_err();
        assert!(matches!(err, RunnerError::Generation(_)));
    }
}
