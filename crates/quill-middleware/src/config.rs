//! Configuration for the document middleware.

use std::sync::Arc;

use quill_document::{Document, GeneratorSettings, ServiceDescriptor};

use crate::processor::DocumentProcessor;

/// The default path the document is served under.
pub const DEFAULT_DOCUMENT_PATH: &str = "swagger/v1/swagger.json";

/// A deprecated single post-process callback, invoked after all processors.
pub type PostProcessHook = Arc<dyn Fn(&mut Document) + Send + Sync>;

/// Immutable configuration for a [`DocumentMiddleware`] instance.
///
/// Built once at construction and never mutated afterwards.
///
/// [`DocumentMiddleware`]: crate::DocumentMiddleware
#[derive(Clone)]
pub struct DocumentConfig {
    /// Path the document is served under, compared with separators trimmed.
    pub path: String,
    /// Service descriptors handed to the generator.
    pub services: Vec<ServiceDescriptor>,
    /// Generation settings, passed through to the generator.
    pub settings: GeneratorSettings,
    /// Ordered document processors.
    pub processors: Vec<Arc<dyn DocumentProcessor>>,
    /// Legacy trailing post-process stage.
    pub post_process: Option<PostProcessHook>,
}

impl std::fmt::Debug for DocumentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentConfig")
            .field("path", &self.path)
            .field("services", &self.services.len())
            .field("processors", &self.processors.len())
            .field("post_process", &self.post_process.is_some())
            .finish()
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DocumentConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> DocumentConfigBuilder {
        DocumentConfigBuilder::new()
    }
}

/// Builder for [`DocumentConfig`].
#[derive(Default)]
pub struct DocumentConfigBuilder {
    path: Option<String>,
    services: Vec<ServiceDescriptor>,
    settings: GeneratorSettings,
    processors: Vec<Arc<dyn DocumentProcessor>>,
    post_process: Option<PostProcessHook>,
}

impl DocumentConfigBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the serve path (default: [`DEFAULT_DOCUMENT_PATH`]).
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Adds a service descriptor.
    #[must_use]
    pub fn service(mut self, service: ServiceDescriptor) -> Self {
        self.services.push(service);
        self
    }

    /// Replaces the service descriptor list.
    #[must_use]
    pub fn services(mut self, services: Vec<ServiceDescriptor>) -> Self {
        self.services = services;
        self
    }

    /// Sets the generation settings.
    #[must_use]
    pub fn settings(mut self, settings: GeneratorSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Appends a document processor. Processors run in registration order.
    #[must_use]
    pub fn processor(mut self, processor: impl DocumentProcessor + 'static) -> Self {
        self.processors.push(Arc::new(processor));
        self
    }

    /// Sets the legacy post-process callback, invoked after all processors.
    #[deprecated(note = "register a DocumentProcessor instead")]
    #[must_use]
    pub fn post_process<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut Document) + Send + Sync + 'static,
    {
        self.post_process = Some(Arc::new(hook));
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> DocumentConfig {
        DocumentConfig {
            path: self
                .path
                .unwrap_or_else(|| DEFAULT_DOCUMENT_PATH.to_string()),
            services: self.services,
            settings: self.settings,
            processors: self.processors,
            post_process: self.post_process,
        }
    }
}
