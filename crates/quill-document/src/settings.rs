//! Generation settings passed through to document generators.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Settings consumed by a [`DocumentGenerator`].
///
/// The serving core treats these as opaque apart from
/// `middleware_base_path`, which it uses to derive the document's
/// `basePath` from the request. Everything else is handed to the generator
/// unchanged, and unknown keys from spec files land in `extras`.
///
/// [`DocumentGenerator`]: crate::DocumentGenerator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorSettings {
    /// Document title; generators fall back to a service-derived name.
    pub title: Option<String>,
    /// Document version.
    pub version: Option<String>,
    /// Document description.
    pub description: Option<String>,
    /// The URL prefix the serving middleware is mounted under.
    ///
    /// Its length is stripped from the request path-base when deriving
    /// the document's `basePath`. When absent, nothing is stripped.
    pub middleware_base_path: Option<String>,
    /// Generator-specific settings the core does not interpret.
    #[serde(flatten)]
    pub extras: IndexMap<String, serde_json::Value>,
}

impl GeneratorSettings {
    /// Create settings with a title and version.
    #[must_use]
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            version: Some(version.into()),
            ..Default::default()
        }
    }

    /// Set the middleware mount path.
    #[must_use]
    pub fn with_middleware_base_path(mut self, path: impl Into<String>) -> Self {
        self.middleware_base_path = Some(path.into());
        self
    }
}
