//! # Quill Middleware
//!
//! HTTP middleware that serves a lazily generated API description document.
//!
//! The middleware matches requests against a configured path and responds
//! with the serialized document, forwarding everything else to the next
//! handler in the chain. Generation is expensive, so it happens at most
//! once per middleware instance: the first matching request computes the
//! document (enriched with that request's host, scheme and path-base), runs
//! the configured processor pipeline, serializes, and caches the result for
//! the process lifetime.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use quill_document::{GeneratorSettings, ReflectionGenerator, ServiceDescriptor};
//! use quill_middleware::{DocumentConfig, DocumentMiddleware};
//!
//! let config = DocumentConfig::builder()
//!     .path("swagger/v1/swagger.json")
//!     .service(ServiceDescriptor::new("OrdersService").endpoint("GET", "/orders"))
//!     .settings(GeneratorSettings::new("Orders API", "1.0.0"))
//!     .build();
//!
//! let middleware = DocumentMiddleware::new(config, Arc::new(ReflectionGenerator::new()));
//! assert!(middleware.matches("/swagger/v1/swagger.json"));
//! ```

pub mod cache;
pub mod config;
pub mod middleware;
pub mod processor;
pub mod serve;
pub mod types;

pub use cache::DocumentCache;
pub use config::{DocumentConfig, DocumentConfigBuilder, PostProcessHook, DEFAULT_DOCUMENT_PATH};
pub use middleware::{BoxFuture, Middleware, Next};
pub use processor::{DocumentProcessor, FnProcessor};
pub use serve::{DocumentMiddleware, RequestInfo};
pub use types::{Request, Response, ResponseExt};
