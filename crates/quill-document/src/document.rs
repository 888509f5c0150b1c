//! The API description document model.
//!
//! The model follows the Swagger 2.0 layout: a root object carrying
//! `host`, `basePath` and `schemes` alongside the path and definition maps.
//! Only the fields the serving core reads and writes are modeled as typed
//! fields; everything a generator produces beyond them travels through the
//! flattened `extensions` map untouched.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::DocumentResult;

/// The transfer scheme a service is reachable over.
///
/// Serialized lowercase (`"http"` / `"https"`). The `schemes` list on
/// [`Document`] preserves insertion order and is deliberately not
/// deduplicated: generators may pre-populate it and the serving core
/// appends the request scheme on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Plain HTTP.
    Http,
    /// TLS.
    Https,
}

/// API metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
    /// API title.
    pub title: String,
    /// API version.
    pub version: String,
    /// API description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A path item containing the operations available on a single path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathItem {
    /// GET operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    /// PUT operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    /// POST operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    /// DELETE operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    /// PATCH operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
}

/// An API operation (endpoint).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Operation {
    /// Unique operation identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "operationId")]
    pub operation_id: Option<String>,
    /// Short summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Tags for grouping.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Responses keyed by status code.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub responses: IndexMap<String, ResponseObject>,
}

/// Response definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseObject {
    /// Description (required by the format).
    pub description: String,
    /// Response schema, opaque to the serving core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
}

/// The generated API description document.
///
/// Generators own construction; the serving core owns the document from the
/// moment a generator returns it until it is serialized via [`to_json`] and
/// discarded. The core sets `host`, `schemes` and `base_path` from the
/// triggering request before any processors run.
///
/// [`to_json`]: Document::to_json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Format version (always "2.0").
    pub swagger: String,
    /// API metadata.
    pub info: Info,
    /// Network location serving the API.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,
    /// URL path prefix under which the API is mounted.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[serde(rename = "basePath")]
    pub base_path: String,
    /// Transfer schemes, in insertion order. May contain duplicates.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemes: Vec<Scheme>,
    /// API paths and operations.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub paths: IndexMap<String, PathItem>,
    /// Reusable type definitions, opaque to the serving core.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub definitions: IndexMap<String, serde_json::Value>,
    /// Generator-supplied content the core passes through untouched.
    #[serde(flatten)]
    pub extensions: IndexMap<String, serde_json::Value>,
}

impl Document {
    /// Create an empty document with the given title and version.
    #[must_use]
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            swagger: "2.0".to_string(),
            info: Info {
                title: title.into(),
                version: version.into(),
                description: None,
            },
            host: String::new(),
            base_path: String::new(),
            schemes: Vec::new(),
            paths: IndexMap::new(),
            definitions: IndexMap::new(),
            extensions: IndexMap::new(),
        }
    }

    /// Append a scheme.
    ///
    /// Appends without deduplicating; a scheme a generator already added
    /// stays in place even if the same scheme is pushed again.
    pub fn push_scheme(&mut self, scheme: Scheme) {
        self.schemes.push(scheme);
    }

    /// Add a path item.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>, item: PathItem) -> Self {
        self.paths.insert(path.into(), item);
        self
    }

    /// Serialize the document to pretty-printed JSON.
    ///
    /// This is the artifact form the serving core caches and returns over
    /// HTTP.
    pub fn to_json(&self) -> DocumentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
