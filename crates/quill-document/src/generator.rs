//! The generator capability and a descriptor-driven default implementation.

use serde::{Deserialize, Serialize};

use crate::document::{Document, Operation, PathItem, ResponseObject};
use crate::error::{DocumentError, DocumentResult};
use crate::settings::GeneratorSettings;

/// An introspected service definition a generator consumes.
///
/// Descriptors are opaque handles as far as the serving core is concerned;
/// only generators interpret them. The endpoint list is the minimal shape
/// the built-in generator understands, and `metadata` carries whatever a
/// richer generator needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// Service type name (e.g. `"OrdersService"`).
    pub name: String,
    /// Endpoints exposed by the service.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<EndpointDescriptor>,
    /// Generator-specific metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// A single endpoint on a service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// HTTP method (`GET`, `POST`, ...).
    pub method: String,
    /// URL path template.
    pub path: String,
    /// Operation identifier; defaults to `{service}_{method}` naming.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
}

impl ServiceDescriptor {
    /// Create a descriptor with no endpoints.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoints: Vec::new(),
            metadata: None,
        }
    }

    /// Add an endpoint.
    #[must_use]
    pub fn endpoint(mut self, method: impl Into<String>, path: impl Into<String>) -> Self {
        self.endpoints.push(EndpointDescriptor {
            method: method.into(),
            path: path.into(),
            operation_id: None,
        });
        self
    }
}

/// The capability that turns service descriptors into a [`Document`].
///
/// Invoked by the serving core exactly once per cache miss and by the batch
/// runner once per executed spec file. Implementations must be pure with
/// respect to their inputs: the same descriptors and settings produce an
/// equivalent document.
pub trait DocumentGenerator: Send + Sync {
    /// Generate a document for the given services.
    fn generate(
        &self,
        services: &[ServiceDescriptor],
        settings: &GeneratorSettings,
    ) -> DocumentResult<Document>;
}

/// Default generator that maps descriptors straight onto the document.
///
/// Produces one path item per distinct endpoint path with a default `200`
/// response per operation. Richer generators (schema introspection, contract
/// artifacts) implement [`DocumentGenerator`] themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReflectionGenerator;

impl ReflectionGenerator {
    /// Create a new generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DocumentGenerator for ReflectionGenerator {
    fn generate(
        &self,
        services: &[ServiceDescriptor],
        settings: &GeneratorSettings,
    ) -> DocumentResult<Document> {
        let title = settings
            .title
            .clone()
            .or_else(|| services.first().map(|s| s.name.clone()))
            .unwrap_or_else(|| "API".to_string());
        let version = settings.version.clone().unwrap_or_else(|| "1.0.0".to_string());

        let mut document = Document::new(title, version);
        document.info.description = settings.description.clone();

        for service in services {
            for endpoint in &service.endpoints {
                let operation_id = endpoint
                    .operation_id
                    .clone()
                    .unwrap_or_else(|| format!("{}_{}", service.name, endpoint.method));

                let mut operation = Operation {
                    operation_id: Some(operation_id),
                    summary: None,
                    tags: vec![service.name.clone()],
                    responses: indexmap::IndexMap::new(),
                };
                operation.responses.insert(
                    "200".to_string(),
                    ResponseObject {
                        description: "Successful response".to_string(),
                        schema: None,
                    },
                );

                let item = document.paths.entry(endpoint.path.clone()).or_default();
                match endpoint.method.to_uppercase().as_str() {
                    "GET" => item.get = Some(operation),
                    "PUT" => item.put = Some(operation),
                    "POST" => item.post = Some(operation),
                    "DELETE" => item.delete = Some(operation),
                    "PATCH" => item.patch = Some(operation),
                    other => {
                        return Err(DocumentError::generation(format!(
                            "unsupported HTTP method '{other}' on {}",
                            endpoint.path
                        )));
                    }
                }
            }
        }

        Ok(document)
    }
}
