//! The on-disk document specification format.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use quill_document::{GeneratorSettings, ServiceDescriptor};

use crate::error::{RunnerError, RunnerResult};

/// File extension for document specification files.
pub const SPEC_EXTENSION: &str = "quill";

/// A document specification loaded from a `.quill` file.
///
/// Each spec describes one independent generation: which services to
/// describe, the generator settings, and where to write the serialized
/// document. Specs know nothing about the HTTP serving core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentSpec {
    /// Services the generator should describe.
    pub services: Vec<ServiceDescriptor>,
    /// Generation settings.
    pub settings: GeneratorSettings,
    /// Output files the serialized document is written to.
    pub outputs: Vec<PathBuf>,
}

impl DocumentSpec {
    /// Loads a specification from a JSON file.
    ///
    /// A missing file maps to [`RunnerError::Load`], a file that is not
    /// valid spec JSON to [`RunnerError::Parse`].
    pub async fn load(path: impl AsRef<Path>) -> RunnerResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| RunnerError::Load {
                path: path.to_path_buf(),
                source,
            })?;

        serde_json::from_str(&content).map_err(|source| RunnerError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
