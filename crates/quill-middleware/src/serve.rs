//! The document-serving middleware.
//!
//! Matches requests against the configured document path and responds with
//! the cached artifact, generating it on the first hit. Everything else is
//! forwarded unchanged to the next handler in the chain.

use std::sync::Arc;

use http::StatusCode;
use tracing::{debug, error, info};

use quill_document::{Document, DocumentGenerator, DocumentResult, Scheme};

use crate::cache::DocumentCache;
use crate::config::DocumentConfig;
use crate::middleware::{BoxFuture, Middleware, Next};
use crate::types::{Request, Response, ResponseExt};

/// Request context captured for document enrichment.
///
/// Extracted from the triggering request before generation runs so the
/// exclusive section never touches the request itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
    /// The request's network authority, empty when unavailable.
    pub host: String,
    /// The request scheme (`"http"` or `"https"`).
    pub scheme: String,
    /// The mount prefix an outer router stripped before dispatch.
    ///
    /// Read from the `x-forwarded-prefix` header; empty when absent.
    pub path_base: String,
}

impl RequestInfo {
    /// Extracts enrichment context from a request.
    #[must_use]
    pub fn from_request(request: &Request) -> Self {
        let host = request
            .uri()
            .authority()
            .map(|a| a.to_string())
            .or_else(|| {
                request
                    .headers()
                    .get(http::header::HOST)
                    .and_then(|v| v.to_str().ok())
                    .map(ToString::to_string)
            })
            .unwrap_or_default();

        let scheme = request
            .uri()
            .scheme_str()
            .map(ToString::to_string)
            .or_else(|| {
                request
                    .headers()
                    .get("x-forwarded-proto")
                    .and_then(|v| v.to_str().ok())
                    .map(ToString::to_string)
            })
            .unwrap_or_else(|| "http".to_string());

        let path_base = request
            .headers()
            .get("x-forwarded-prefix")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
            .unwrap_or_default();

        Self {
            host,
            scheme,
            path_base,
        }
    }
}

/// Middleware serving the generated API description document.
///
/// One instance owns one [`DocumentCache`]: the generator runs at most once
/// per instance regardless of concurrent request volume, and the serialized
/// artifact is reused for the process lifetime.
pub struct DocumentMiddleware {
    config: DocumentConfig,
    generator: Arc<dyn DocumentGenerator>,
    cache: DocumentCache,
}

impl std::fmt::Debug for DocumentMiddleware {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentMiddleware")
            .field("config", &self.config)
            .field("cache_warm", &self.cache.is_warm())
            .finish_non_exhaustive()
    }
}

impl DocumentMiddleware {
    /// Creates a middleware for the given configuration and generator.
    #[must_use]
    pub fn new(config: DocumentConfig, generator: Arc<dyn DocumentGenerator>) -> Self {
        Self {
            config,
            generator,
            cache: DocumentCache::new(),
        }
    }

    /// Whether a request path addresses the document endpoint.
    ///
    /// Both sides are compared with leading and trailing separators
    /// trimmed, case-insensitively, so `/swagger` and `/swagger/` both
    /// match a configured path of `swagger`.
    #[must_use]
    pub fn matches(&self, request_path: &str) -> bool {
        let configured = self.config.path.trim_matches('/');
        let requested = request_path.trim_matches('/');
        requested.eq_ignore_ascii_case(configured)
    }

    /// Returns the artifact, generating and caching it on first access.
    pub fn artifact(&self, info: &RequestInfo) -> DocumentResult<Arc<str>> {
        self.cache.get_or_compute(|| {
            info!(path = %self.config.path, "generating API description document");
            self.generate(info)
        })
    }

    /// The full generation sequence, run once per cache miss.
    fn generate(&self, info: &RequestInfo) -> DocumentResult<String> {
        let mut document = self
            .generator
            .generate(&self.config.services, &self.config.settings)?;

        self.enrich(&mut document, info);

        for processor in &self.config.processors {
            debug!(processor = processor.name(), "running document processor");
            processor.process(&mut document)?;
        }

        if let Some(hook) = &self.config.post_process {
            hook(&mut document);
        }

        document.to_json()
    }

    /// Applies the triggering request's context to the document.
    fn enrich(&self, document: &mut Document, info: &RequestInfo) {
        document.host = info.host.clone();
        document.push_scheme(if info.scheme == "http" {
            Scheme::Http
        } else {
            Scheme::Https
        });
        document.base_path = strip_mount_prefix(
            &info.path_base,
            self.config.settings.middleware_base_path.as_deref(),
        );
    }
}

/// Derives the document `basePath` from the request path-base.
///
/// The configured mount path's length is stripped off the path-base; a
/// missing mount path strips nothing, and a mount path longer than the
/// path-base clamps to the empty string rather than panicking.
fn strip_mount_prefix(path_base: &str, mount_path: Option<&str>) -> String {
    let strip = mount_path.map_or(0, str::len);
    path_base.get(strip..).unwrap_or("").to_string()
}

impl Middleware for DocumentMiddleware {
    fn name(&self) -> &'static str {
        "document"
    }

    fn handle<'a>(&'a self, request: Request, next: Next<'a>) -> BoxFuture<'a, Response> {
        Box::pin(async move {
            let path = request.uri().path();
            if path.is_empty() || !self.matches(path) {
                return next.run(request).await;
            }

            let info = RequestInfo::from_request(&request);
            match self.artifact(&info) {
                Ok(artifact) => Response::json(artifact.as_bytes().to_vec()),
                Err(err) => {
                    error!(error = %err, "document generation failed");
                    Response::json_error(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "DOCUMENT_GENERATION_FAILED",
                        &err.to_string(),
                    )
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::Request as HttpRequest;
    use http_body_util::Full;
    use quill_document::{GeneratorSettings, ReflectionGenerator};

    fn make_request(uri: &str) -> Request {
        HttpRequest::builder()
            .uri(uri)
            .body(Full::new(Bytes::new()))
            .unwrap()
    }

    fn middleware_at(path: &str) -> DocumentMiddleware {
        DocumentMiddleware::new(
            DocumentConfig::builder().path(path).build(),
            Arc::new(ReflectionGenerator::new()),
        )
    }

    #[test]
    fn test_path_match_trims_separators() {
        let mw = middleware_at("swagger");
        assert!(mw.matches("/swagger"));
        assert!(mw.matches("/swagger/"));
        assert!(mw.matches("swagger"));
        assert!(!mw.matches("/other"));
    }

    #[test]
    fn test_path_match_case_insensitive() {
        let mw = middleware_at("Swagger/v1/Swagger.json");
        assert!(mw.matches("/swagger/V1/swagger.JSON"));
    }

    #[test]
    fn test_request_info_from_absolute_uri() {
        let request = make_request("https://api.example.com/swagger");
        let info = RequestInfo::from_request(&request);
        assert_eq!(info.host, "api.example.com");
        assert_eq!(info.scheme, "https");
        assert_eq!(info.path_base, "");
    }

    #[test]
    fn test_request_info_from_headers() {
        let request = HttpRequest::builder()
            .uri("/swagger")
            .header("host", "internal:8080")
            .header("x-forwarded-proto", "https")
            .header("x-forwarded-prefix", "/api/v1")
            .body(Full::new(Bytes::new()))
            .unwrap();

        let info = RequestInfo::from_request(&request);
        assert_eq!(info.host, "internal:8080");
        assert_eq!(info.scheme, "https");
        assert_eq!(info.path_base, "/api/v1");
    }

    #[test]
    fn test_request_info_defaults() {
        let request = make_request("/swagger");
        let info = RequestInfo::from_request(&request);
        assert_eq!(info.host, "");
        assert_eq!(info.scheme, "http");
        assert_eq!(info.path_base, "");
    }

    #[test]
    fn test_strip_mount_prefix() {
        assert_eq!(strip_mount_prefix("/api/v1", Some("/api")), "/v1");
        assert_eq!(strip_mount_prefix("/api", Some("/api")), "");
        assert_eq!(strip_mount_prefix("/api/v1", None), "/api/v1");
        assert_eq!(strip_mount_prefix("", Some("/api")), "");
        // Mount path longer than the path-base clamps instead of panicking.
        assert_eq!(strip_mount_prefix("/v1", Some("/api/longer")), "");
    }

    #[test]
    fn test_enrichment_applies_request_context() {
        let mw = DocumentMiddleware::new(
            DocumentConfig::builder()
                .settings(GeneratorSettings::default().with_middleware_base_path("/api"))
                .build(),
            Arc::new(ReflectionGenerator::new()),
        );

        let info = RequestInfo {
            host: "api.example.com".to_string(),
            scheme: "https".to_string(),
            path_base: "/api/v1".to_string(),
        };

        let artifact = mw.artifact(&info).unwrap();
        let document: Document = serde_json::from_str(&artifact).unwrap();
        assert_eq!(document.host, "api.example.com");
        assert_eq!(document.base_path, "/v1");
        assert_eq!(document.schemes, vec![Scheme::Https]);
    }

    #[test]
    fn test_enrichment_http_scheme() {
        let mw = middleware_at("swagger");
        let info = RequestInfo {
            host: String::new(),
            scheme: "http".to_string(),
            path_base: String::new(),
        };

        let artifact = mw.artifact(&info).unwrap();
        let document: Document = serde_json::from_str(&artifact).unwrap();
        assert_eq!(document.schemes, vec![Scheme::Http]);
    }
}
