//! Tower middleware for the request pipeline.
//!
//! # Design
//! Two hand-rolled `Layer`/`Service` pairs wrap the router from the outside:
//!
//! - [`RewriteLayer`] rewrites one path prefix to another. It must sit
//!   outside the router, since middleware attached with `Router::layer`
//!   runs after the route has already been matched.
//! - [`RequestLogLayer`] emits a `Started.` line when a request enters the
//!   stack and a `Finished.` line once the response future resolves, error
//!   responses included. The destination is an injected [`RequestLogger`]
//!   so tests can capture and assert on the exact line ordering.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::{Method, Request, Uri};
use chrono::{DateTime, Utc};
use tower::{Layer, Service};

/// Pipeline phase reported to a [`RequestLogger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Started,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Started => f.write_str("Started"),
            Phase::Finished => f.write_str("Finished"),
        }
    }
}

/// Destination for request log lines.
pub trait RequestLogger: Send + Sync {
    fn record(&self, method: &Method, path: &str, at: DateTime<Utc>, phase: Phase);
}

/// Default [`RequestLogger`] that emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl RequestLogger for TracingLogger {
    fn record(&self, method: &Method, path: &str, at: DateTime<Utc>, phase: Phase) {
        tracing::info!("[{method} {path} {at}] {phase}.");
    }
}

/// Rewrites one path prefix to another before the request reaches the router.
#[derive(Debug, Clone)]
pub struct RewriteLayer {
    from: &'static str,
    to: &'static str,
}

impl RewriteLayer {
    pub fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }
}

impl<S> Layer<S> for RewriteLayer {
    type Service = RewriteService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RewriteService {
            inner,
            from: self.from,
            to: self.to,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RewriteService<S> {
    inner: S,
    from: &'static str,
    to: &'static str,
}

impl<S, B> Service<Request<B>> for RewriteService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        if let Some(uri) = rewrite_prefix(req.uri(), self.from, self.to) {
            *req.uri_mut() = uri;
        }
        self.inner.call(req)
    }
}

/// Returns the rewritten URI when the path is exactly `from` or starts with
/// `from` followed by a path separator; the remainder of the path and the
/// query string are preserved. Returns `None` when the prefix does not match.
fn rewrite_prefix(uri: &Uri, from: &str, to: &str) -> Option<Uri> {
    let rest = uri.path().strip_prefix(from)?;
    if !(rest.is_empty() || rest.starts_with('/')) {
        // "/tasksfoo" must not match "/tasks".
        return None;
    }
    let path = format!("{to}{rest}");
    let rewritten = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path,
    };
    rewritten.parse().ok()
}

/// Logs every request on the way in and on the way out.
#[derive(Clone)]
pub struct RequestLogLayer {
    logger: Arc<dyn RequestLogger>,
}

impl RequestLogLayer {
    pub fn new(logger: Arc<dyn RequestLogger>) -> Self {
        Self { logger }
    }
}

impl<S> Layer<S> for RequestLogLayer {
    type Service = RequestLogService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestLogService {
            inner,
            logger: self.logger.clone(),
        }
    }
}

#[derive(Clone)]
pub struct RequestLogService<S> {
    inner: S,
    logger: Arc<dyn RequestLogger>,
}

impl<S, B> Service<Request<B>> for RequestLogService<S>
where
    S: Service<Request<B>>,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<S::Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let logger = self.logger.clone();
        logger.record(&method, &path, Utc::now(), Phase::Started);
        let future = self.inner.call(req);
        Box::pin(async move {
            let response = future.await;
            logger.record(&method, &path, Utc::now(), Phase::Finished);
            response
        })
    }
}
