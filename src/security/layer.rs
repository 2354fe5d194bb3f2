//! Tower middleware that decorates responses with the security header policy.

use std::task::{Context, Poll};

use axum::http::{Request, Response};
use futures_util::future::{MapOk, TryFutureExt};
use tower::{Layer, Service};

use crate::security::policy::apply_security_headers;

/// Layer that wraps a service in [`SecurityHeadersService`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityHeadersLayer;

impl SecurityHeadersLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for SecurityHeadersLayer {
    type Service = SecurityHeadersService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SecurityHeadersService { inner }
    }
}

/// Forwards every request to the inner service untouched and stamps the
/// policy headers onto whatever response comes back.
///
/// Header names the inner service already set are not overwritten. Errors
/// from the inner service pass through as-is.
#[derive(Debug, Clone)]
pub struct SecurityHeadersService<S> {
    inner: S,
}

impl<S> SecurityHeadersService<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for SecurityHeadersService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = MapOk<S::Future, fn(Response<ResBody>) -> Response<ResBody>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        self.inner
            .call(req)
            .map_ok(with_security_headers as fn(Response<ResBody>) -> Response<ResBody>)
    }
}

fn with_security_headers<B>(mut response: Response<B>) -> Response<B> {
    apply_security_headers(response.headers_mut());
    response
}
