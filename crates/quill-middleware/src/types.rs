//! Common HTTP types used by the document middleware.

use bytes::Bytes;
use http_body_util::Full;

/// The HTTP request type flowing through the middleware chain.
///
/// A standard `http::Request` with a `Full<Bytes>` body. The document
/// middleware never reads the body.
pub type Request = http::Request<Full<Bytes>>;

/// The HTTP response type produced by the middleware chain.
pub type Response = http::Response<Full<Bytes>>;

/// Extension trait for building common responses.
pub trait ResponseExt {
    /// Creates a 200 response with a JSON body.
    fn json(body: impl Into<Bytes>) -> Response;

    /// Creates a JSON error response.
    fn json_error(status: http::StatusCode, code: &str, message: &str) -> Response;
}

impl ResponseExt for Response {
    fn json(body: impl Into<Bytes>) -> Response {
        http::Response::builder()
            .status(http::StatusCode::OK)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Full::new(body.into()))
            .expect("failed to build JSON response")
    }

    fn json_error(status: http::StatusCode, code: &str, message: &str) -> Response {
        let body = serde_json::json!({
            "error": {
                "code": code,
                "message": message
            }
        });

        http::Response::builder()
            .status(status)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Full::new(Bytes::from(body.to_string())))
            .expect("failed to build JSON error response")
    }
}
