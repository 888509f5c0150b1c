//! # Quill Document
//!
//! API description document model for the Quill toolkit.
//!
//! This crate provides:
//! - **Document model**: a Swagger-style API description (`host`, `schemes`,
//!   `basePath`, paths, definitions) with order-preserving serialization
//! - **Generator trait**: the capability that turns service descriptors and
//!   generation settings into a [`Document`]
//! - **Settings**: opaque generation settings passed through to generators
//!
//! ## Quick Start
//!
//! ```
//! use quill_document::{Document, Scheme};
//!
//! let mut document = Document::new("Orders API", "1.0.0");
//! document.host = "api.example.com".to_string();
//! document.push_scheme(Scheme::Https);
//!
//! let json = document.to_json().unwrap();
//! assert!(json.contains("api.example.com"));
//! ```

mod document;
mod error;
mod generator;
mod settings;

pub use document::{Document, Info, Operation, PathItem, ResponseObject, Scheme};
pub use error::{DocumentError, DocumentResult};
pub use generator::{DocumentGenerator, ReflectionGenerator, ServiceDescriptor};
pub use settings::GeneratorSettings;
