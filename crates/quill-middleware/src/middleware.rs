//! The middleware trait and forwarding chain.
//!
//! A middleware either produces a response itself or forwards the request
//! unchanged to the next handler in the chain via [`Next`]. The document
//! middleware is one such stage; hosts can compose it with their own.

use crate::types::{Request, Response};
use std::future::Future;
use std::pin::Pin;

/// A boxed future that resolves to a value.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A request-handling middleware stage.
///
/// Implementations must call `next.run()` at most once. Not calling it
/// short-circuits the chain and the middleware's own response is returned.
pub trait Middleware: Send + Sync + 'static {
    /// Returns the unique name of this middleware stage, used for logging.
    fn name(&self) -> &'static str;

    /// Handle the request, either responding directly or forwarding via `next`.
    fn handle<'a>(&'a self, request: Request, next: Next<'a>) -> BoxFuture<'a, Response>;
}

/// Callback invoking the next middleware or terminal handler in the chain.
pub struct Next<'a> {
    inner: NextInner<'a>,
}

enum NextInner<'a> {
    Chain {
        middleware: &'a dyn Middleware,
        next: Box<Next<'a>>,
    },
    Handler(Box<dyn FnOnce(Request) -> BoxFuture<'static, Response> + Send + 'a>),
}

impl<'a> Next<'a> {
    /// Creates a `Next` that will invoke the given middleware.
    #[must_use]
    pub fn new(middleware: &'a dyn Middleware, next: Next<'a>) -> Self {
        Self {
            inner: NextInner::Chain {
                middleware,
                next: Box::new(next),
            },
        }
    }

    /// Creates a terminal `Next` that invokes the given handler.
    pub fn handler<F>(f: F) -> Self
    where
        F: FnOnce(Request) -> BoxFuture<'static, Response> + Send + 'a,
    {
        Self {
            inner: NextInner::Handler(Box::new(f)),
        }
    }

    /// Invokes the next middleware or handler.
    ///
    /// Consumes `self` so it can only be called once.
    pub async fn run(self, request: Request) -> Response {
        match self.inner {
            NextInner::Chain { middleware, next } => middleware.handle(request, *next).await,
            NextInner::Handler(handler) => handler(request).await,
        }
    }
}
